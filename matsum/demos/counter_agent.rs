//! Demo driver: background counter with direction and stop controls

use std::thread;
use std::time::Duration;

use matsum::{CounterAgent, Direction};

fn main() {
    env_logger::init();

    let agent = CounterAgent::spawn(Duration::from_millis(100));

    // Count up for half a second, then reverse.
    thread::sleep(Duration::from_millis(500));
    println!("after 500ms: {}", agent.value());
    agent.set_direction(Direction::Down);

    // Watchdog: one second in, the agent is stopped whatever it is doing.
    thread::sleep(Duration::from_millis(500));
    let finale = agent.stop();
    println!("final counter: {finale}");
}
