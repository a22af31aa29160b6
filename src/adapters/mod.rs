pub mod directive;
pub mod fake_provider;
pub mod random_string;
pub mod recorder;
pub mod request_builder;
pub mod response_asserter;
