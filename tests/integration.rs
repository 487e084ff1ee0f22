//! Integration test harness; tests run against a live server

mod integration {
    mod api_tests;
}
