use web_sys::window;

pub fn get_api_base_url() -> String {
    // Use the current hostname and port so the viewer works when the page
    // is opened from another machine on the network.
    if let Some(window) = window() {
        if let Ok(location) = window.location().host() {
            let protocol = window
                .location()
                .protocol()
                .unwrap_or_else(|_| "http:".to_string());
            return format!("{}//{}/api", protocol, location);
        }
    }

    // Default to 127.0.0.1 for development
    "http://127.0.0.1:3000/api".to_string()
}

pub fn get_asset_url(path: &str) -> String {
    if path.starts_with("http") {
        path.to_string()
    } else {
        format!("{}{}", get_api_base_url(), path)
    }
}
