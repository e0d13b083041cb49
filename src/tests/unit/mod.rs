//! Page flows driven through `SiteApp::handle`.

mod filter_flow_tests;
mod page_tests;
