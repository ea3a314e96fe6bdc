pub const CONTAINER_CENTERED: &str = "min-h-screen w-full flex items-center justify-center text-white";
pub const VIEWER_SHELL: &str = "min-h-screen w-full relative overflow-hidden text-white";
pub const VIEWER_SCRIM: &str = "absolute inset-0 bg-gradient-to-br from-black/40 via-transparent to-black/50";
pub const VIEWER_COLUMN: &str = "relative z-10 w-full max-w-[1600px] mx-auto px-6 py-6 flex flex-col gap-6 min-h-screen";
pub const TITLE_CARD: &str = "max-w-2xl rounded-2xl bg-black/35 backdrop-blur-md p-5 shadow-[0_10px_40px_rgba(0,0,0,0.35)]";
pub const WHEEL_CARD: &str = "rounded-3xl bg-black/25 backdrop-blur-md p-6 md:p-10 shadow-[0_20px_80px_rgba(0,0,0,0.45)]";
pub const FOOTER_BAR: &str = "rounded-t-2xl bg-black/30 backdrop-blur-md text-center text-sm opacity-90 py-2";
pub const TEXT_H1: &str = "text-4xl md:text-5xl font-extrabold leading-tight drop-shadow-sm";
pub const TEXT_H2: &str = "text-2xl font-bold";
pub const TEXT_SUBTITLE: &str = "mt-2 text-base md:text-lg opacity-90";
pub const TEXT_ERROR: &str = "text-red-400 text-center";
pub const SPIN_BUTTON: &str = "w-28 h-28 lg:w-36 lg:h-36 rounded-full grid place-items-center text-black font-extrabold text-base lg:text-lg shadow-[0_0_35px_rgba(255,255,0,0.7)] border-4 border-yellow-200 bg-yellow-400 hover:bg-yellow-300";
pub const SPIN_BUTTON_DISABLED: &str = "w-28 h-28 lg:w-36 lg:h-36 rounded-full grid place-items-center text-black font-extrabold text-base lg:text-lg border-4 border-gray-200 bg-gray-300 cursor-not-allowed";
pub const RESTART_BUTTON: &str = "px-6 py-3 rounded-xl bg-indigo-600 hover:bg-indigo-500 text-white text-lg";
pub const MODAL_BACKDROP: &str = "fixed inset-0 flex items-center justify-center bg-black/80 p-4 z-[9998]";
pub const MODAL_PANEL: &str = "bg-white text-black rounded-2xl p-6 md:p-8 max-w-[80vw] max-h-[80vh] w-full flex flex-col items-center overflow-auto";
pub const MODAL_BUTTON: &str = "mt-6 px-6 py-3 bg-pink-600 hover:bg-pink-500 rounded-xl text-white text-lg";
pub const REMAINING_BADGE: &str = "mt-4 px-4 py-1 rounded-full bg-black/40 text-sm text-white/90";
