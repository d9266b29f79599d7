mod bulk;
mod common;
mod routing;
