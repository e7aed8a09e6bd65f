//! Driver walkthrough against the mock bus
//!
//! Shows the full surface without hardware attached: startup, LED frames,
//! a bounded move with completion polling, and coalesced sensor reads.

use beakbot::{Driver, HardwareRevision, MockBus, MockImu, MoveDirection, Side, TailPort};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Robot Driver - Mock Bus Demo ===\n");

    let bus = MockBus::new();
    let handle = bus.handle();

    let mut robot = Driver::start(Box::new(bus), Box::new(MockImu::new()), HardwareRevision::RevA)?;
    println!("Started driver with profile '{}'", robot.profile().name);

    robot.set_beak(100, 0, 0);
    robot.set_tail(TailPort::All, 0, 100, 0);
    println!("Sent LED frames, beak is now {:?}", robot.beak_color());

    // Script the device for the move: one response for the motor frame, a
    // sensor frame still reporting motion, then one reporting completion.
    handle.queue_response([0x00; 16]);
    handle.queue_response(moving_sensor_frame());
    handle.queue_response(idle_sensor_frame());

    robot.set_move(MoveDirection::Forward, 10.0, 50);
    println!("Move complete after {} frames on the wire", handle.frame_count());

    // These all coalesce onto the snapshot the completion poll fetched.
    println!("Distance reading: {} cm", robot.distance());
    println!(
        "Light left/right: {} / {}",
        robot.light(Side::Left),
        robot.light(Side::Right)
    );
    println!("Battery: {} mV", robot.battery());

    let (hits, refreshes) = robot.sensor_cache_stats();
    println!("Sensor cache: {} coalesced reads, {} bus reads", hits, refreshes);

    println!();
    for frame in handle.sent_frames() {
        println!("wire: {:02X?}", frame);
    }

    println!("\nMock drive demo completed successfully!");
    Ok(())
}

fn moving_sensor_frame() -> [u8; 16] {
    let mut frame = idle_sensor_frame();
    frame[6] |= 0x80; // position-control flag still set
    frame
}

fn idle_sensor_frame() -> [u8; 16] {
    let mut frame = [0u8; 16];
    frame[0] = 0x07; // firmware revision
    frame[2] = 0x01; // distance high
    frame[3] = 0x44; // distance low
    frame[4] = 55; // light left
    frame[5] = 52; // light right
    frame[8] = 200; // battery
    frame
}
