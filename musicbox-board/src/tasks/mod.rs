pub mod player_task;
