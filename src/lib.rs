pub mod composer;
pub mod controller;
pub mod labels;
pub mod logging;
pub mod model;
pub mod page;
pub mod poller;
pub mod remote;
pub mod reservation;
pub mod section;
pub mod session;
pub mod tui;

mod tui_shell;

#[cfg(test)]
#[path = "tests/support.rs"]
mod test_support;
