//! Blocking driver facade
//!
//! One `Driver` owns the whole stack: transport, arbiter, sensor cache,
//! LED state, calibration profile, and the orientation engine. The default
//! entry points are lenient in the device's spirit (out-of-range inputs
//! clamp, a busy bus drops the command silently); each has a `try_`
//! counterpart that validates and surfaces errors instead.

use crate::calibration::{CalibrationProfile, HardwareRevision};
use crate::core::constants::{STARTUP_DELAY_MS, STARTUP_SELECT_US};
use crate::core::{
    Axis, Frame, LedColor, MoveDirection, Orientation, Side, TailPort, TurnDirection,
};
use crate::hardware::{BusArbiter, BusInterface, DriverError, DriverResult, FrameTransport};
use crate::motion::{self, PollPolicy};
use crate::orientation::{InertialSensors, OrientationEngine};
use crate::protocol::commands;
use crate::sensors::{SensorCache, SensorSnapshot};
use log::{debug, info, warn};
use std::time::Duration;

pub struct Driver {
    transport: FrameTransport,
    arbiter: BusArbiter,
    cache: SensorCache,
    engine: OrientationEngine,
    profile: CalibrationProfile,
    beak: LedColor,
    tail: [LedColor; 4],
}

impl Driver {
    /// Run the one-time startup sequence and hand back a ready driver.
    /// Construction is the initialization call, so it cannot run twice for
    /// the same bus and nothing can use the bus before it.
    pub fn start(
        bus: Box<dyn BusInterface>,
        imu: Box<dyn InertialSensors>,
        revision: HardwareRevision,
    ) -> DriverResult<Self> {
        Self::start_with_profile(bus, imu, revision.profile())
    }

    /// Startup with an explicit calibration profile (e.g. one loaded from
    /// JSON rather than a shipped revision preset).
    pub fn start_with_profile(
        bus: Box<dyn BusInterface>,
        imu: Box<dyn InertialSensors>,
        profile: CalibrationProfile,
    ) -> DriverResult<Self> {
        let mut transport = FrameTransport::new(bus);
        let mut arbiter = BusArbiter::new(
            profile.timing.arbiter_interval_ms,
            profile.timing.arbiter_attempts,
        );

        // Let the device firmware get clear of its bootloader, then halt
        // whatever a previous program left running. Only after that frame
        // is the bus open for business.
        transport.delay_ms(STARTUP_DELAY_MS);
        transport.delay_us(STARTUP_SELECT_US);
        transport.transact(&commands::stop()?);
        arbiter.arm();

        let engine = OrientationEngine::new(imu, profile.mounting_angle_rad());
        info!("driver started with calibration profile {}", profile.name);

        Ok(Self {
            transport,
            arbiter,
            cache: SensorCache::new(),
            engine,
            profile,
            beak: LedColor::OFF,
            tail: [LedColor::OFF; 4],
        })
    }

    pub fn profile(&self) -> &CalibrationProfile {
        &self.profile
    }

    /// The beak color the device currently shows, as last acknowledged.
    pub fn beak_color(&self) -> LedColor {
        self.beak
    }

    /// (reads served from cache, reads that went to the bus)
    pub fn sensor_cache_stats(&self) -> (u32, u32) {
        self.cache.stats()
    }

    // ---- motion ----

    /// Drive straight for a distance, blocking until the device reports
    /// the move complete. Inputs clamp; a busy bus drops the command.
    pub fn set_move(&mut self, direction: MoveDirection, distance_cm: f64, percent_speed: i32) {
        let percent = percent_speed.clamp(-100, 100);
        let distance = distance_cm.max(0.0);
        let poll = PollPolicy::unbounded(&self.profile);
        if let Err(err) = self.try_set_move(direction, distance, percent, poll) {
            warn!("move dropped: {}", err);
        }
    }

    /// Strict move: validates inputs, surfaces bus and poll errors.
    pub fn try_set_move(
        &mut self,
        direction: MoveDirection,
        distance_cm: f64,
        percent_speed: i32,
        poll: PollPolicy,
    ) -> DriverResult<()> {
        check_percent("percent_speed", percent_speed)?;
        check_non_negative("distance_cm", distance_cm)?;

        let ticks = motion::ticks_for_distance(&self.profile, distance_cm);
        if ticks == 0 {
            // Zero is the continuous-motion sentinel on the wire; a move
            // that rounds to nothing must not be transmitted at all.
            return Ok(());
        }

        let velocity = motion::move_velocity(&self.profile, direction, percent_speed);
        self.transact(&commands::set_motors(velocity, ticks, velocity, ticks)?)?;
        self.wait_for_motion(poll)
    }

    /// Turn in place by an angle, blocking until complete. Inputs clamp; a
    /// busy bus drops the command.
    pub fn set_turn(&mut self, direction: TurnDirection, angle_degrees: f64, percent_speed: i32) {
        let percent = percent_speed.clamp(-100, 100);
        let angle = angle_degrees.max(0.0);
        let poll = PollPolicy::unbounded(&self.profile);
        if let Err(err) = self.try_set_turn(direction, angle, percent, poll) {
            warn!("turn dropped: {}", err);
        }
    }

    /// Strict turn: validates inputs, surfaces bus and poll errors.
    pub fn try_set_turn(
        &mut self,
        direction: TurnDirection,
        angle_degrees: f64,
        percent_speed: i32,
        poll: PollPolicy,
    ) -> DriverResult<()> {
        check_percent("percent_speed", percent_speed)?;
        check_non_negative("angle_degrees", angle_degrees)?;

        let ticks = motion::ticks_for_angle(&self.profile, angle_degrees);
        if ticks == 0 {
            return Ok(());
        }

        let (left, right) = motion::turn_velocities(&self.profile, direction, percent_speed);
        self.transact(&commands::set_motors(left, ticks, right, ticks)?)?;
        self.wait_for_motion(poll)
    }

    /// Run the wheels continuously at independent percent speeds. Returns
    /// immediately; motion is unbounded until the next command.
    pub fn set_wheel_speeds(&mut self, left_percent: i32, right_percent: i32) {
        let left = left_percent.clamp(-100, 100);
        let right = right_percent.clamp(-100, 100);
        if let Err(err) = self.try_set_wheel_speeds(left, right) {
            warn!("wheel speed command dropped: {}", err);
        }
    }

    pub fn try_set_wheel_speeds(&mut self, left_percent: i32, right_percent: i32) -> DriverResult<()> {
        check_percent("left_percent", left_percent)?;
        check_percent("right_percent", right_percent)?;

        let left = motion::convert_speed(&self.profile, left_percent);
        let right = motion::convert_speed(&self.profile, right_percent);
        self.transact(&commands::set_motors(left, 0, right, 0)?)?;
        Ok(())
    }

    /// Halt both motors.
    pub fn stop(&mut self) {
        if let Err(err) = self.try_stop() {
            warn!("stop dropped: {}", err);
        }
    }

    pub fn try_stop(&mut self) -> DriverResult<()> {
        self.transact(&commands::set_motors(0, 0, 0, 0)?)?;
        Ok(())
    }

    // ---- LEDs ----

    /// Set the beak LED color (percent channels, clamped).
    pub fn set_beak(&mut self, red: i32, green: i32, blue: i32) {
        let color = LedColor::from_percent(red, green, blue);
        if let Err(err) = self.try_set_beak(color) {
            warn!("beak color dropped: {}", err);
        }
    }

    pub fn try_set_beak(&mut self, color: LedColor) -> DriverResult<()> {
        check_color(&color)?;
        self.transact(&commands::set_all_leds(&color, &self.tail)?)?;
        self.beak = color;
        Ok(())
    }

    /// Set one tail LED, or all four, to a color (percent channels,
    /// clamped).
    pub fn set_tail(&mut self, port: TailPort, red: i32, green: i32, blue: i32) {
        let color = LedColor::from_percent(red, green, blue);
        if let Err(err) = self.try_set_tail(port, color) {
            warn!("tail color dropped: {}", err);
        }
    }

    pub fn try_set_tail(&mut self, port: TailPort, color: LedColor) -> DriverResult<()> {
        check_color(&color)?;
        match port.port_number() {
            Some(number) => {
                self.transact(&commands::set_single_led(number, &color)?)?;
                self.tail[(number - 1) as usize] = color;
            }
            None => {
                let slots = [color; 4];
                self.transact(&commands::set_all_leds(&self.beak, &slots)?)?;
                self.tail = slots;
            }
        }
        Ok(())
    }

    // ---- sensors ----

    /// Rangefinder distance in centimeters.
    pub fn distance(&mut self) -> u32 {
        self.lenient_refresh();
        self.cache.snapshot().distance_cm(&self.profile)
    }

    /// Ambient light percent for one side, beak bleed subtracted.
    pub fn light(&mut self, side: Side) -> u8 {
        self.lenient_refresh();
        self.cache
            .snapshot()
            .light_percent(side, &self.profile, &self.beak)
    }

    /// Line sensor whiteness percent for one side.
    pub fn line(&mut self, side: Side) -> u8 {
        self.lenient_refresh();
        self.cache.snapshot().line_percent(side, &self.profile)
    }

    /// Battery voltage in millivolts.
    pub fn battery(&mut self) -> u32 {
        self.lenient_refresh();
        self.cache.snapshot().battery_millivolts(&self.profile)
    }

    /// Wheel encoder position in rotations.
    pub fn encoder(&mut self, side: Side) -> f64 {
        self.lenient_refresh();
        self.cache.snapshot().encoder_rotations(side, &self.profile)
    }

    /// Device-reported flag for an in-progress bounded move.
    pub fn position_flag(&mut self) -> bool {
        self.lenient_refresh();
        self.cache.snapshot().position_flag()
    }

    /// Firmware revision byte from the sensor response.
    pub fn firmware_version(&mut self) -> u8 {
        self.lenient_refresh();
        self.cache.snapshot().firmware_version()
    }

    /// Strict refresh: re-reads if the snapshot is stale and surfaces bus
    /// errors, for callers that cannot accept silently stale values.
    pub fn try_refresh_sensors(&mut self) -> DriverResult<()> {
        self.refresh(false)
    }

    /// Zero both wheel encoders. The cached snapshot is invalidated so the
    /// next getter sees post-reset counts.
    pub fn reset_encoders(&mut self) {
        if let Err(err) = self.try_reset_encoders() {
            warn!("encoder reset dropped: {}", err);
        }
    }

    pub fn try_reset_encoders(&mut self) -> DriverResult<()> {
        self.transact(&commands::reset_encoders()?)?;
        self.cache.invalidate();
        Ok(())
    }

    // ---- orientation ----

    /// Robot-frame acceleration on one axis (m/s²).
    pub fn acceleration(&mut self, axis: Axis) -> f64 {
        self.engine.acceleration(axis)
    }

    /// Robot-frame magnetic field on one axis (microtesla).
    pub fn magnetic_field(&mut self, axis: Axis) -> f64 {
        self.engine.magnetic_field(axis)
    }

    /// Tilt-compensated compass heading, integer degrees [0, 360).
    pub fn compass(&mut self) -> u16 {
        self.engine.compass()
    }

    /// Threshold test for one discrete pose.
    pub fn is_orientation(&mut self, kind: Orientation) -> bool {
        self.engine.is_orientation(kind)
    }

    /// Current pose, `None` between poses.
    pub fn orientation(&mut self) -> Option<Orientation> {
        self.engine.classify()
    }

    // ---- internals ----

    /// Acquire the bus, exchange one frame, release. Release runs on every
    /// path that acquired; a timed-out acquire touches nothing.
    fn transact(&mut self, frame: &Frame) -> DriverResult<Frame> {
        let transport = &mut self.transport;
        let arbiter = &mut self.arbiter;

        if !arbiter.acquire_with(|ms| transport.delay_ms(ms)) {
            return Err(DriverError::BusUnavailable {
                attempts: arbiter.max_attempts(),
            });
        }
        let response = transport.transact(frame);
        arbiter.release();
        Ok(response)
    }

    fn refresh(&mut self, force: bool) -> DriverResult<()> {
        if force {
            self.cache.invalidate();
        }
        let window = Duration::from_millis(self.profile.staleness_ms);
        if self.cache.needs_refresh(window) {
            let response = self.transact(&commands::read_sensors()?)?;
            self.cache.store(SensorSnapshot::from_frame(&response));
        }
        Ok(())
    }

    fn lenient_refresh(&mut self) {
        if let Err(err) = self.refresh(false) {
            debug!("sensor refresh skipped, serving cached snapshot: {}", err);
        }
    }

    /// Completion loop for bounded moves: settle, then re-read sensors and
    /// test the position flag until it clears or the policy gives up.
    fn wait_for_motion(&mut self, poll: PollPolicy) -> DriverResult<()> {
        self.transport.delay_ms(poll.settle_ms);
        let mut attempts = 0u32;
        loop {
            self.refresh(true)?;
            if !self.cache.snapshot().position_flag() {
                return Ok(());
            }
            attempts += 1;
            if let Some(max) = poll.max_attempts {
                if attempts >= max {
                    return Err(DriverError::MotionTimeout { attempts });
                }
            }
            self.transport.delay_ms(poll.interval_ms);
        }
    }
}

fn check_percent(parameter: &'static str, value: i32) -> DriverResult<()> {
    if !(-100..=100).contains(&value) {
        return Err(DriverError::ValueOutOfRange {
            parameter,
            value: value as i64,
            min: -100,
            max: 100,
        });
    }
    Ok(())
}

fn check_non_negative(parameter: &'static str, value: f64) -> DriverResult<()> {
    if !(value >= 0.0) {
        return Err(DriverError::ValueOutOfRange {
            parameter,
            value: value as i64,
            min: 0,
            max: i64::MAX,
        });
    }
    Ok(())
}

fn check_color(color: &LedColor) -> DriverResult<()> {
    for (name, value) in [
        ("red", color.red),
        ("green", color.green),
        ("blue", color.blue),
    ] {
        if value > 100 {
            return Err(DriverError::ValueOutOfRange {
                parameter: name,
                value: value as i64,
                min: 0,
                max: 100,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::FRAME_SIZE;
    use crate::hardware::{MockBus, MockBusHandle};
    use crate::orientation::MockImu;
    use std::thread::sleep;

    fn started_driver() -> (Driver, MockBusHandle) {
        let bus = MockBus::new();
        let handle = bus.handle();
        let driver = Driver::start(
            Box::new(bus),
            Box::new(MockImu::new()),
            HardwareRevision::RevA,
        )
        .unwrap();
        (driver, handle)
    }

    fn sensor_frame(set: &[(usize, u8)]) -> [u8; FRAME_SIZE] {
        let mut frame = [0u8; FRAME_SIZE];
        for &(i, v) in set {
            frame[i] = v;
        }
        frame
    }

    fn moving_frame() -> [u8; FRAME_SIZE] {
        sensor_frame(&[(6, 0x80)])
    }

    #[test]
    fn test_startup_emits_single_stop_frame() {
        let (_driver, handle) = started_driver();
        let frames = handle.sent_frames();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].len(), FRAME_SIZE);
        assert_eq!(frames[0][0], 0xCB);
        assert!(frames[0][1..].iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn test_move_sends_motor_frame_then_polls_until_flag_clears() {
        let (mut driver, handle) = started_driver();
        handle.queue_response([0; FRAME_SIZE]); // motor command response
        handle.queue_response(moving_frame());
        handle.queue_response(moving_frame());
        handle.queue_response(sensor_frame(&[])); // flag cleared

        driver.set_move(MoveDirection::Forward, 10.0, 50);

        let frames = handle.sent_frames();
        // startup stop + motor + three sensor polls
        assert_eq!(frames.len(), 5);

        let motor = &frames[1];
        assert_eq!(motor[0], 0xD2);
        assert_eq!(motor[1], 0x40);
        // 50% * 0.36 rounds to 18, forward sign bit set, both sides.
        assert_eq!(motor[2], 0x80 | 18);
        assert_eq!(motor[6], 0x80 | 18);
        // 10 cm * 49.7 ticks/cm rounds to 497 = 0x0001F1, MSB first.
        assert_eq!(&motor[3..6], &[0x00, 0x01, 0xF1]);
        assert_eq!(&motor[7..10], &[0x00, 0x01, 0xF1]);

        assert!(frames[2..].iter().all(|f| f[0] == 0xD4));
    }

    #[test]
    fn test_zero_distance_move_transmits_nothing() {
        let (mut driver, handle) = started_driver();
        driver.set_move(MoveDirection::Forward, 0.0, 100);
        driver.set_move(MoveDirection::Backward, 0.005, 100); // rounds to 0 ticks
        driver.set_turn(TurnDirection::Left, 0.0, 100);
        assert_eq!(handle.frame_count(), 1); // startup only
    }

    #[test]
    fn test_turn_mirrors_velocities() {
        let (mut driver, handle) = started_driver();
        handle.queue_response([0; FRAME_SIZE]);
        handle.queue_response(sensor_frame(&[])); // already complete

        driver.set_turn(TurnDirection::Right, 90.0, 50);

        let motor = handle.sent_frames()[1].clone();
        assert_eq!(motor[0], 0xD2);
        assert_eq!(motor[2], 0x80 | 18); // left forward
        assert_eq!(motor[6], 18); // right backward
        // 90 deg * 4.335 ticks/deg rounds to 390 = 0x000186.
        assert_eq!(&motor[3..6], &[0x00, 0x01, 0x86]);
        assert_eq!(&motor[7..10], &[0x00, 0x01, 0x86]);
    }

    #[test]
    fn test_wheel_speeds_send_zero_ticks_without_polling() {
        let (mut driver, handle) = started_driver();
        driver.set_wheel_speeds(30, -30);

        let frames = handle.sent_frames();
        assert_eq!(frames.len(), 2); // no completion polls
        let motor = &frames[1];
        // 30% * 0.36 rounds to 11.
        assert_eq!(motor[2], 0x80 | 11);
        assert_eq!(motor[6], 11);
        assert_eq!(&motor[3..6], &[0, 0, 0]);
        assert_eq!(&motor[7..10], &[0, 0, 0]);
    }

    #[test]
    fn test_stop_sends_zero_velocity_zero_ticks() {
        let (mut driver, handle) = started_driver();
        driver.stop();
        let motor = handle.last_frame().unwrap();
        assert_eq!(motor[0], 0xD2);
        assert_eq!(motor[1], 0x40);
        assert_eq!(&motor[2..10], &[0, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_sensor_reads_coalesce_inside_staleness_window() {
        let (mut driver, handle) = started_driver();
        handle.queue_response(sensor_frame(&[(2, 0x01), (3, 0x44)]));

        let first = driver.distance();
        let second = driver.distance();
        assert_eq!(first, 30);
        assert_eq!(second, 30);
        assert_eq!(handle.frame_count(), 2); // one read for both calls

        sleep(Duration::from_millis(15));
        handle.queue_response(sensor_frame(&[(2, 0x00), (3, 0x64)]));
        assert_eq!(driver.distance(), 9); // 100 raw * 0.0919 rounds to 9
        assert_eq!(handle.frame_count(), 3);
    }

    #[test]
    fn test_light_applies_beak_correction() {
        let (mut driver, handle) = started_driver();
        driver.set_beak(100, 0, 0);
        handle.queue_response(sensor_frame(&[(5, 50)]));

        let correction = driver
            .profile()
            .light_correction_right
            .evaluate(&LedColor::from_percent(100, 0, 0));
        let expected = (50.0 - correction).round().clamp(0.0, 100.0) as u8;
        assert_eq!(driver.light(Side::Right), expected);
        assert_eq!(expected, 49);
    }

    #[test]
    fn test_led_state_survives_partial_updates() {
        let (mut driver, handle) = started_driver();
        driver.set_beak(10, 20, 30);
        driver.set_tail(TailPort::One, 100, 0, 0);
        driver.set_beak(40, 50, 60);

        let frames = handle.sent_frames();
        // startup, all-LED (beak), single-LED, all-LED (beak again)
        assert_eq!(frames.len(), 4);

        let single = &frames[2];
        assert_eq!(single[0], 0xD3);
        assert_eq!(single[1], 1);
        assert_eq!(&single[2..5], &[255, 0, 0]);
        assert!(single[5..].iter().all(|&b| b == 0));

        // The second full-LED frame re-emits tail port one's color.
        let full = &frames[3];
        assert_eq!(full[0], 0xD0);
        assert_eq!(&full[1..4], &LedColor::from_percent(40, 50, 60).wire_bytes());
        assert_eq!(&full[4..7], &[255, 0, 0]);
        assert_eq!(&full[7..10], &[0, 0, 0]);
    }

    #[test]
    fn test_set_tail_all_keeps_beak_color() {
        let (mut driver, handle) = started_driver();
        driver.set_beak(0, 100, 0);
        driver.set_tail(TailPort::All, 0, 0, 100);

        let full = handle.last_frame().unwrap();
        assert_eq!(full[0], 0xD0);
        assert_eq!(&full[1..4], &[0, 255, 0]);
        for slot in 0..4 {
            assert_eq!(&full[4 + slot * 3..7 + slot * 3], &[0, 0, 255]);
        }
    }

    #[test]
    fn test_busy_bus_drops_command_silently() {
        let (mut driver, handle) = started_driver();
        // Hold the bus as another in-flight transaction would.
        assert!(driver.arbiter.acquire_with(|_| {}));

        driver.set_wheel_speeds(50, 50);
        assert_eq!(handle.frame_count(), 1); // nothing transmitted

        let err = driver.try_set_wheel_speeds(50, 50).unwrap_err();
        assert!(matches!(err, DriverError::BusUnavailable { .. }));
        // The timed-out attempts did not steal or release the claim.
        assert!(!driver.arbiter.is_ready());

        driver.arbiter.release();
        driver.set_wheel_speeds(50, 50);
        assert_eq!(handle.frame_count(), 2);
    }

    #[test]
    fn test_bounded_poll_times_out_when_flag_never_clears() {
        let (mut driver, handle) = started_driver();
        handle.queue_response([0; FRAME_SIZE]); // motor response
        handle.queue_response(moving_frame());
        handle.queue_response(moving_frame());

        let policy = PollPolicy::bounded(driver.profile(), 2);
        let err = driver
            .try_set_move(MoveDirection::Forward, 10.0, 50, policy)
            .unwrap_err();
        assert_eq!(err, DriverError::MotionTimeout { attempts: 2 });
        // The bus is released and usable after the timeout.
        driver.stop();
        assert_eq!(handle.last_frame().unwrap()[0], 0xD2);
    }

    #[test]
    fn test_strict_variants_reject_out_of_range_inputs() {
        let (mut driver, handle) = started_driver();
        let poll = PollPolicy::unbounded(driver.profile());

        let err = driver
            .try_set_move(MoveDirection::Forward, 10.0, 150, poll)
            .unwrap_err();
        assert!(matches!(err, DriverError::ValueOutOfRange { parameter: "percent_speed", .. }));

        let err = driver
            .try_set_turn(TurnDirection::Left, -90.0, 50, poll)
            .unwrap_err();
        assert!(matches!(err, DriverError::ValueOutOfRange { parameter: "angle_degrees", .. }));

        let err = driver
            .try_set_beak(LedColor {
                red: 130,
                green: 0,
                blue: 0,
            })
            .unwrap_err();
        assert!(matches!(err, DriverError::ValueOutOfRange { parameter: "red", .. }));

        assert_eq!(handle.frame_count(), 1); // nothing reached the bus
    }

    #[test]
    fn test_lenient_inputs_clamp_instead_of_erroring() {
        let (mut driver, handle) = started_driver();
        driver.set_wheel_speeds(500, -500);
        let motor = handle.last_frame().unwrap();
        // Clamped to +/-100%: magnitude 36 both sides.
        assert_eq!(motor[2], 0x80 | 36);
        assert_eq!(motor[6], 36);
    }

    #[test]
    fn test_reset_encoders_invalidates_cache() {
        let (mut driver, handle) = started_driver();
        handle.queue_response(sensor_frame(&[(9, 0x00), (10, 0x03), (11, 0x18)]));
        assert_eq!(driver.encoder(Side::Left), 1.0);
        assert_eq!(handle.frame_count(), 2);

        driver.reset_encoders();
        assert_eq!(handle.last_frame().unwrap()[0], 0xD5);

        // Within the staleness window, but the reset forces a re-read.
        assert_eq!(driver.encoder(Side::Left), 0.0);
        assert_eq!(handle.frame_count(), 4);
    }

    #[test]
    fn test_getters_read_zeros_before_first_successful_read() {
        let (mut driver, _handle) = started_driver();
        // Default mock response is all zeros, same as the initial snapshot.
        assert_eq!(driver.distance(), 0);
        assert_eq!(driver.battery(), 0);
        assert!(!driver.position_flag());
        assert_eq!(driver.firmware_version(), 0);
    }

    #[test]
    fn test_orientation_passthrough() {
        let bus = MockBus::new();
        let mut imu = MockImu::new();
        imu.accel = nalgebra::Vector3::new(0.0, 0.0, -9.81);
        let mut driver = Driver::start_with_profile(
            Box::new(bus),
            Box::new(imu),
            CalibrationProfile {
                mounting_angle_deg: 0.0,
                ..CalibrationProfile::rev_a()
            },
        )
        .unwrap();

        assert!(driver.is_orientation(Orientation::Level));
        assert_eq!(driver.orientation(), Some(Orientation::Level));
        assert_eq!(driver.acceleration(Axis::Z), -9.81);
    }
}
