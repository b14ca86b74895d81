#![no_std]
#![no_main]

use defmt::info;
use embassy_executor::Spawner;
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use musicbox_board::{create_player_task, get_system_config};

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_stm32::init(get_system_config());

    info!("=== music box started ===");

    create_player_task!(spawner, p);

    loop {
        Timer::after_millis(1000).await;
    }
}
