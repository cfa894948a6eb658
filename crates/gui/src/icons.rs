use iced::widget::svg;
use lazy_static::lazy_static;

const SVG_BELL: &[u8] = include_bytes!("../assets/icons/bell.svg");
const SVG_CLIPBOARD_LIST: &[u8] = include_bytes!("../assets/icons/clipboard_list.svg");
const SVG_WRENCH: &[u8] = include_bytes!("../assets/icons/wrench.svg");
const SVG_PLUS: &[u8] = include_bytes!("../assets/icons/plus.svg");
const SVG_TRASH: &[u8] = include_bytes!("../assets/icons/trash.svg");

lazy_static! {
    static ref BELL: svg::Handle = svg::Handle::from_memory(SVG_BELL);
    static ref CLIPBOARD_LIST: svg::Handle = svg::Handle::from_memory(SVG_CLIPBOARD_LIST);
    static ref WRENCH: svg::Handle = svg::Handle::from_memory(SVG_WRENCH);
    static ref PLUS: svg::Handle = svg::Handle::from_memory(SVG_PLUS);
    static ref TRASH: svg::Handle = svg::Handle::from_memory(SVG_TRASH);
}

pub fn bell() -> svg::Handle {
    BELL.clone()
}

pub fn clipboard_list() -> svg::Handle {
    CLIPBOARD_LIST.clone()
}

pub fn wrench() -> svg::Handle {
    WRENCH.clone()
}

pub fn plus() -> svg::Handle {
    PLUS.clone()
}

pub fn trash() -> svg::Handle {
    TRASH.clone()
}
