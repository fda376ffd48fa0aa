pub(crate) mod date;

pub(crate) use date::{format_caption_date, parse_date};
