#![no_std]
#![no_main]

use defmt::info;
use embassy_executor::Spawner;
use embassy_stm32::gpio::{Level, Output, Speed};
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use musicbox_board::get_system_config;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_stm32::init(get_system_config());

    info!("blinky hwtest: walking PF6-PF9");

    let mut leds = [
        Output::new(p.PF6, Level::Low, Speed::Low),
        Output::new(p.PF7, Level::Low, Speed::Low),
        Output::new(p.PF8, Level::Low, Speed::Low),
        Output::new(p.PF9, Level::Low, Speed::Low),
    ];

    loop {
        for led in leds.iter_mut() {
            led.set_high();
            Timer::after_millis(150).await;
            led.set_low();
        }
    }
}
