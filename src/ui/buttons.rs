//! GPIO button input with async debouncing.
//!
//! One physical button (active-low with internal pull-up):
//!   - MODE - cycle to the next meter policy
//!
//! The task waits for a GPIO edge, debounces it, and sends a
//! `ButtonEvent` to the meter task's channel.

use crate::config::BUTTON_DEBOUNCE_MS;
use crate::ui::ButtonEvent;
use defmt::info;
use embassy_nrf::gpio::{AnyPin, Input, Pull};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Sender;
use embassy_time::{Duration, Timer};

/// Run the MODE button polling loop.
///
/// Waits for the pin to go low (pressed), debounces, sends the event,
/// then waits for release before repeating.
pub async fn button_task(
    pin: AnyPin,
    tx: &Sender<'static, CriticalSectionRawMutex, ButtonEvent, 4>,
) -> ! {
    let mut btn = Input::new(pin, Pull::Up);

    loop {
        // Wait for falling edge (button press, active-low).
        btn.wait_for_falling_edge().await;

        // Debounce: wait and re-check.
        Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;

        if btn.is_low() {
            info!("Button: MODE");
            tx.send(ButtonEvent::Mode).await;

            // Wait for release to avoid repeat triggers.
            btn.wait_for_rising_edge().await;
            Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;
        }
    }
}
