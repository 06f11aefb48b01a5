#![allow(dead_code, unused_imports)]

pub use shellrun_test_utils::builders;
pub use shellrun_test_utils::fake_runner::FakeRunner;
pub use shellrun_test_utils::{init_tracing, with_timeout};
