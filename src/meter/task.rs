//! Meter sampling task.
//!
//! Owns the meter state, the accelerometer handle, and the tick source.
//! Each tick: peek the latest sensor reading, advance the active policy,
//! push a frame to the UI channel. MODE button events swap the policy and
//! re-arm the ticker at the new cadence.
//!
//! The ticker is owned by this task, so cancelling the task disarms the
//! tick source with it; nothing can fire into torn-down state.

use crate::accel::Lis3dh;
use crate::meter::policy::{Meter, MeterMode};
use crate::meter::MeterFrame;
use crate::ui::ButtonEvent;
use defmt::{debug, info, warn};
use embassy_futures::select::{select, Either};
use embassy_nrf::peripherals::TWISPI1;
use embassy_nrf::twim::Twim;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Receiver, Sender};
use embassy_time::{Duration, Ticker};

/// Run the sampling loop. Starts in cloak mode.
pub async fn meter_task(
    mut accel: Lis3dh<Twim<'static, TWISPI1>>,
    frames: Sender<'static, CriticalSectionRawMutex, MeterFrame, 4>,
    buttons: Receiver<'static, CriticalSectionRawMutex, ButtonEvent, 4>,
) -> ! {
    let mut meter = Meter::new(MeterMode::Cloak);
    let mut ticker = Ticker::every(Duration::from_millis(meter.tick_ms()));

    // Paint the initial state before the first tick elapses.
    frames
        .send(MeterFrame {
            mode: meter.mode(),
            filled: meter.bars(),
        })
        .await;

    loop {
        match select(ticker.next(), buttons.receive()).await {
            Either::First(()) => {
                let sample = match accel.peek().await {
                    Ok(s) => s,
                    Err(e) => {
                        // No retry policy: log and skip this tick's update.
                        warn!("accel peek failed ({:?}), skipping tick", e);
                        continue;
                    }
                };

                let moved = meter.advance(sample);
                debug!(
                    "tick: movement={} level={} bars={}",
                    moved,
                    meter.level(),
                    meter.bars()
                );

                frames
                    .send(MeterFrame {
                        mode: meter.mode(),
                        filled: meter.bars(),
                    })
                    .await;
            }
            Either::Second(ButtonEvent::Mode) => {
                let mode = meter.mode().next();
                info!("mode -> {:?}", mode);
                meter = Meter::new(mode);
                ticker = Ticker::every(Duration::from_millis(meter.tick_ms()));

                frames
                    .send(MeterFrame {
                        mode: meter.mode(),
                        filled: meter.bars(),
                    })
                    .await;
            }
        }
    }
}
