//! cloakwatch - wrist-worn cloaking-status meter for nRF52840.
//!
//! A 10-segment charge bar on an SSD1306 OLED: motion detected by the
//! LIS3DH drains the charge, stillness restores it. A MODE button swaps
//! the meter policy for a display sweep demo.
//!
//! Wiring (nRF52840-DK defaults, see `config.rs`):
//!   SSD1306 OLED on TWISPI0 (SDA P0.26, SCL P0.27)
//!   LIS3DH accel on TWISPI1 (SDA P0.30, SCL P0.31)
//!   MODE button  on P0.11   (active-low)
//!
//! Three cooperative tasks, all state dispatcher-serialized:
//!   button -> meter  (ButtonEvent channel)
//!   meter  -> ui     (MeterFrame channel)

#![no_std]
#![no_main]

mod accel;
mod config;
mod error;
mod meter;
mod ui;

use defmt::{error, info};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_nrf::gpio::{AnyPin, Pin};
use embassy_nrf::peripherals::{TWISPI0, TWISPI1};
use embassy_nrf::{bind_interrupts, twim};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};
use panic_probe as _;

use crate::accel::Lis3dh;
use crate::meter::MeterFrame;
use crate::ui::display::{self, Display};
use crate::ui::ButtonEvent;

bind_interrupts!(struct Irqs {
    TWISPI0 => twim::InterruptHandler<TWISPI0>;
    TWISPI1 => twim::InterruptHandler<TWISPI1>;
});

/// meter -> ui frames.
static FRAMES: Channel<CriticalSectionRawMutex, MeterFrame, 4> = Channel::new();
/// button -> meter events.
static BUTTONS: Channel<CriticalSectionRawMutex, ButtonEvent, 4> = Channel::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("cloakwatch starting");

    let display_i2c = twim::Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());
    let mut oled = display::init(display_i2c);

    let accel_i2c = twim::Twim::new(p.TWISPI1, Irqs, p.P0_30, p.P0_31, twim::Config::default());
    let mut accel = Lis3dh::new(accel_i2c);
    if let Err(e) = accel.init().await {
        // No retry policy for acquisition failures: park with the error shown.
        error!("accelerometer init failed: {:?}", e);
        display::draw_error(&mut oled, "NO ACCEL");
        return;
    }
    info!("accelerometer online, 10 Hz continuous");

    spawner.must_spawn(ui_task(oled, FRAMES.receiver()));
    spawner.must_spawn(meter_task(accel, FRAMES.sender(), BUTTONS.receiver()));
    spawner.must_spawn(button_task(p.P0_11.degrade(), BUTTONS.sender()));
}

#[embassy_executor::task]
async fn ui_task(
    mut oled: Display<twim::Twim<'static, TWISPI0>>,
    frames: Receiver<'static, CriticalSectionRawMutex, MeterFrame, 4>,
) {
    loop {
        let frame = frames.receive().await;
        display::draw_meter(&mut oled, frame);
    }
}

#[embassy_executor::task]
async fn meter_task(
    accel: Lis3dh<twim::Twim<'static, TWISPI1>>,
    frames: Sender<'static, CriticalSectionRawMutex, MeterFrame, 4>,
    buttons: Receiver<'static, CriticalSectionRawMutex, ButtonEvent, 4>,
) {
    meter::task::meter_task(accel, frames, buttons).await
}

#[embassy_executor::task]
async fn button_task(
    pin: AnyPin,
    tx: Sender<'static, CriticalSectionRawMutex, ButtonEvent, 4>,
) {
    ui::buttons::button_task(pin, &tx).await
}
