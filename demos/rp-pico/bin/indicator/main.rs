//! WS2812 strip on GPIO16 as an Idle/Send/Off indicator.
//!
//! Commands arrive on UART0 (GPIO0 TX, GPIO1 RX, 115200 8N1): `R` for Send,
//! `B` or `I` for Idle, `O` for Off. Status lines go back on the same UART.

#![no_std]
#![no_main]

use fugit::RateExtU32;
use panic_halt as _;
use rp_pico::entry;
use rp_pico::hal::{
    Clock, Sio, Timer,
    clocks::init_clocks_and_plls,
    gpio::FunctionUart,
    pac,
    pio::PIOExt,
    uart::{DataBits, StopBits, UartConfig, UartPeripheral},
    watchdog::Watchdog,
};
use rtt_target::{rprintln, rtt_init_print};
use ws2812_pio::Ws2812;

use led_indicator::{
    DEFAULT_PIXEL_COUNT, Indicator, IndicatorConfig, IoSerial, Millis, SmartLedsRenderer,
};
use rp_pico_indicator::time::MillisTimer;

const BAUD_RATE: u32 = 115_200;

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("=== RP Pico LED Indicator ===");

    // Get peripherals
    let mut pac = pac::Peripherals::take().unwrap();

    // Set up watchdog driver
    let mut watchdog = Watchdog::new(pac.WATCHDOG);

    // Configure clocks (125 MHz)
    let clocks = init_clocks_and_plls(
        rp_pico::XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();

    let sio = Sio::new(pac.SIO);
    let pins = rp_pico::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    let timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);

    // WS2812 data line on GPIO16, driven by PIO0 state machine 0
    let (mut pio, sm0, _, _, _) = pac.PIO0.split(&mut pac.RESETS);
    let ws2812 = Ws2812::new(
        pins.gpio16.into_function(),
        &mut pio,
        sm0,
        clocks.peripheral_clock.freq(),
        timer.count_down(),
    );

    // Command link on UART0
    let uart_pins = (
        pins.gpio0.into_function::<FunctionUart>(),
        pins.gpio1.into_function::<FunctionUart>(),
    );
    let uart = UartPeripheral::new(pac.UART0, uart_pins, &mut pac.RESETS)
        .enable(
            UartConfig::new(BAUD_RATE.Hz(), DataBits::Eight, None, StopBits::One),
            clocks.peripheral_clock.freq(),
        )
        .unwrap();

    let time_source = MillisTimer::new(timer);
    let config = IndicatorConfig::DEFAULT;

    // Brightness is replaced by the configured value in `Indicator::new`
    let strip = SmartLedsRenderer::new(ws2812, u8::MAX);
    let serial = IoSerial::new(uart);

    let mut indicator: Indicator<'_, Millis, _, _, _, DEFAULT_PIXEL_COUNT> =
        Indicator::new(strip, serial, &time_source, config);

    if let Err(err) = indicator.start() {
        rprintln!("start failed: {}", err);
    }
    rprintln!("=== Indicator Ready ({} pixels) ===", DEFAULT_PIXEL_COUNT);

    loop {
        if let Err(err) = indicator.tick() {
            rprintln!("tick failed: {}", err);
        }
    }
}
