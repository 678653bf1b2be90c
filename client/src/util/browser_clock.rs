//! Clock backed by the browser's `Date`, formatted in the visitor's locale.

#[cfg(test)]
#[path = "browser_clock_test.rs"]
mod browser_clock_test;

use reports::{Clock, Timestamp};

/// Current time from `js_sys::Date`; the host clock outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now(&self) -> Timestamp {
        #[cfg(feature = "hydrate")]
        {
            let date = js_sys::Date::new_0();
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let millis = date.get_time().max(0.0) as u64;
            let display = String::from(date.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED));
            Timestamp { millis, display }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            reports::SystemClock.now()
        }
    }
}
