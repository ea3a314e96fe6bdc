use std::collections::HashSet;
use std::f64::consts::PI;

use shared::rotation::{normalize_degrees, slice_angle, winner_center};
use shared::wheel_config::Slice;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

const CANVAS_SIZE: f64 = 600.0;

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub slices: Vec<Slice>,
    pub shown_ids: HashSet<String>,
    pub rotation: f64,
    pub spinning: bool,
    pub winner_index: Option<usize>,
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let slices = props.slices.clone();
        let shown_ids = props.shown_ids.clone();
        let rotation = props.rotation;
        let spinning = props.spinning;
        let winner_index = props.winner_index;

        use_effect_with(
            (rotation, spinning, winner_index, slices, shown_ids),
            move |(rotation, spinning, winner_index, slices, shown_ids)| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    if let Some(context) = canvas
                        .get_context("2d")
                        .ok()
                        .flatten()
                        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
                    {
                        draw_wheel(
                            &context,
                            slices,
                            shown_ids,
                            *rotation,
                            *spinning,
                            *winner_index,
                        );
                    }
                }
                || ()
            },
        );
    }

    html! {
        <div class="relative">
            <canvas
                ref={canvas_ref}
                width="600"
                height="600"
                class="w-full max-w-[600px] h-auto rounded-full select-none shadow-[0_0_80px_10px_rgba(255,255,255,0.15)]"
            />
        </div>
    }
}

fn draw_wheel(
    context: &CanvasRenderingContext2d,
    slices: &[Slice],
    shown_ids: &HashSet<String>,
    rotation: f64,
    spinning: bool,
    winner_index: Option<usize>,
) {
    let center = CANVAS_SIZE / 2.0;
    let radius = CANVAS_SIZE * 0.45;
    let angle = slice_angle(slices.len());

    context.clear_rect(0.0, 0.0, CANVAS_SIZE, CANVAS_SIZE);

    // Wheel face, drawn inside a context rotated by the current rotation so
    // positive degrees turn the wheel clockwise.
    context.save();
    let _ = context.translate(center, center);
    let _ = context.rotate(rotation * PI / 180.0);
    let _ = context.translate(-center, -center);

    for (i, slice) in slices.iter().enumerate() {
        // Slice 0 starts at the top pointer position, not at 3 o'clock.
        let a0 = (i as f64 * angle - 90.0) * PI / 180.0;
        let a1 = ((i + 1) as f64 * angle - 90.0) * PI / 180.0;
        let color = if shown_ids.contains(&slice.id) {
            desaturate(&slice.color)
        } else {
            slice.color.clone()
        };

        context.begin_path();
        context.set_fill_style_str(&color);
        context.move_to(center, center);
        let _ = context.arc(center, center, radius, a0, a1);
        context.close_path();
        context.fill();
    }

    // Dividers
    if slices.len() > 1 {
        context.set_stroke_style_str("rgba(255, 255, 255, 0.85)");
        context.set_line_width(2.5);
        for i in 0..slices.len() {
            let a = (i as f64 * angle - 90.0) * PI / 180.0;
            context.begin_path();
            context.move_to(center, center);
            context.line_to(center + radius * a.cos(), center + radius * a.sin());
            context.stroke();
        }
    }

    // Labels along each slice's bisector. The winner's label is snapped
    // horizontal once the wheel rests, so it reads upright under the
    // pointer.
    let residual = normalize_degrees(rotation);
    context.set_text_align("center");
    context.set_text_baseline("middle");
    for (i, slice) in slices.iter().enumerate() {
        let center_angle = winner_center(slices.len(), i);
        let is_winner = winner_index == Some(i) && !spinning;

        context.save();
        let _ = context.translate(center, center);
        let _ = context.rotate(center_angle * PI / 180.0);
        let _ = context.translate(0.0, -radius * 0.72);
        if is_winner {
            let _ = context.rotate(-(center_angle + residual) * PI / 180.0);
            context.set_font("bold 24px system-ui, sans-serif");
            context.set_shadow_color("rgba(255, 255, 255, 0.8)");
            context.set_shadow_blur(6.0);
        } else {
            context.set_font("20px system-ui, sans-serif");
        }
        context.set_fill_style_str("#ffffff");
        let _ = context.fill_text(&slice.label, 0.0, 0.0);
        context.restore();
    }

    // Hub
    context.begin_path();
    context.set_fill_style_str("#111111");
    let _ = context.arc(center, center, CANVAS_SIZE * 0.04, 0.0, 2.0 * PI);
    context.fill();
    context.begin_path();
    context.set_fill_style_str("#222222");
    let _ = context.arc(center, center, CANVAS_SIZE * 0.028, 0.0, 2.0 * PI);
    context.fill();

    context.restore();

    // Outer ring
    context.begin_path();
    context.set_stroke_style_str(if spinning {
        "rgba(255, 255, 255, 0.6)"
    } else {
        "rgba(255, 255, 255, 0.35)"
    });
    context.set_line_width(6.0);
    let _ = context.arc(center, center, radius - 2.0, 0.0, 2.0 * PI);
    context.stroke();

    // Fixed pointer at the top, tip toward the hub.
    context.set_shadow_color("rgba(0, 0, 0, 0.4)");
    context.set_shadow_blur(6.0);
    context.begin_path();
    context.set_fill_style_str("rgba(255, 255, 255, 0.98)");
    context.move_to(center, center - radius + 26.0);
    context.line_to(center - 16.0, center - radius - 6.0);
    context.line_to(center + 16.0, center - radius - 6.0);
    context.close_path();
    context.fill();
    context.set_shadow_color("rgba(0, 0, 0, 0)");
    context.set_shadow_blur(0.0);
}

/// Washes an already-shown slice toward gray, keeping a hint of its color.
fn desaturate(hex: &str) -> String {
    match hex_to_rgb(hex) {
        Some((r, g, b)) => {
            let mean = (u32::from(r) + u32::from(g) + u32::from(b)) / 3;
            let mix = |x: u8| ((u32::from(x) + 2 * mean) / 3) as u8;
            format!("#{:02x}{:02x}{:02x}", mix(r), mix(g), mix(b))
        }
        None => "#9ca3af".to_string(),
    }
}

fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let h = hex.trim_start_matches('#');
    let full = match h.len() {
        3 => h.chars().flat_map(|c| [c, c]).collect::<String>(),
        6 => h.to_string(),
        _ => return None,
    };
    let v = u32::from_str_radix(&full, 16).ok()?;
    Some(((v >> 16) as u8, (v >> 8) as u8, v as u8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_desaturate_moves_toward_gray() {
        assert_eq!(desaturate("#ff0000"), "#8d3838");
        assert_eq!(desaturate("#abc"), "#b5bbc0");
        assert_eq!(desaturate("not-a-color"), "#9ca3af");
    }
}
