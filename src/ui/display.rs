//! SSD1306 OLED display wrapper.
//!
//! The meter screen is repainted in full on every frame: background
//! chrome, all status slots, footer. Each slot is stamped from one of
//! exactly two 1-bpp sprites (empty or full).

use crate::config::{
    STATUS_BAR_COUNT, STATUS_BAR_HEIGHT, STATUS_BAR_WIDTH, STATUS_BAR_X_OFFSET,
    STATUS_BAR_X_ORIGIN, STATUS_BAR_Y_ORIGIN,
};
use crate::meter::MeterFrame;
use crate::ui::bar_logic::{bar_states, BarState};
use core::fmt::Write;
use embedded_graphics::image::{Image, ImageRaw};
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyleBuilder;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Slot sprites, 1 bpp, one byte per row at the 8 px slot width.
const FULL_BAR_DATA: [u8; STATUS_BAR_HEIGHT as usize] = [0xFF; STATUS_BAR_HEIGHT as usize];
const EMPTY_BAR_DATA: [u8; STATUS_BAR_HEIGHT as usize] = {
    let mut rows = [0x81; STATUS_BAR_HEIGHT as usize];
    rows[0] = 0xFF;
    rows[STATUS_BAR_HEIGHT as usize - 1] = 0xFF;
    rows
};

/// Initialise the SSD1306 display and clear the screen.
pub fn init<I2C>(i2c: I2C) -> Display<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    let _ = display.init();
    display.clear_buffer();
    let _ = display.flush();
    display
}

fn text_style() -> embedded_graphics::mono_font::MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .build()
}

/// Render one meter frame.
pub fn draw_meter<I2C>(display: &mut Display<I2C>, frame: MeterFrame)
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();

    // Background chrome: a border around the slot bank.
    let bank_width = STATUS_BAR_X_OFFSET as u32 * (STATUS_BAR_COUNT as u32 - 1) + STATUS_BAR_WIDTH;
    let _ = Rectangle::new(
        Point::new(STATUS_BAR_X_ORIGIN - 3, STATUS_BAR_Y_ORIGIN - 3),
        Size::new(bank_width + 6, STATUS_BAR_HEIGHT + 6),
    )
    .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
    .draw(display);

    let empty = ImageRaw::<BinaryColor>::new(&EMPTY_BAR_DATA, STATUS_BAR_WIDTH);
    let full = ImageRaw::<BinaryColor>::new(&FULL_BAR_DATA, STATUS_BAR_WIDTH);

    for (i, state) in bar_states(frame.filled).iter().enumerate() {
        let sprite = match state {
            BarState::Full => &full,
            BarState::Empty => &empty,
        };
        let origin = Point::new(
            STATUS_BAR_X_ORIGIN + STATUS_BAR_X_OFFSET * i as i32,
            STATUS_BAR_Y_ORIGIN,
        );
        let _ = Image::new(sprite, origin).draw(display);
    }

    let mut footer: heapless::String<16> = heapless::String::new();
    let _ = write!(
        footer,
        "{} {}/{}",
        frame.mode.label(),
        frame.filled,
        STATUS_BAR_COUNT
    );
    let _ = Text::new(footer.as_str(), Point::new(0, 62), text_style()).draw(display);

    let _ = display.flush();
}

/// Render a transient error message.
pub fn draw_error<I2C>(display: &mut Display<I2C>, message: &str)
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();

    let _ = Text::new("ERROR", Point::new(0, 10), text_style()).draw(display);
    let _ = Text::new(message, Point::new(0, 30), text_style()).draw(display);

    let _ = display.flush();
}
