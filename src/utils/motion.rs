//! Pure animation math for the showcase carousel. Kept free of any
//! framework types so it can be unit tested off-wasm.

/// Base drift speed in offset-units per second. The strip moves leftward,
/// so the live drift carries a negative sign.
pub const DEFAULT_VELOCITY: f64 = 0.4;

/// Scroll velocity (units/sec) that maps to the top of the factor range.
const VELOCITY_INPUT_MAX: f64 = 1000.0;
/// Factor produced at `VELOCITY_INPUT_MAX`.
const VELOCITY_FACTOR_MAX: f64 = 6.0;

/// Cyclically remaps `v` into the band between `min` and `max`.
/// The band may be reversed (`max < min`), which the carousel relies on.
pub fn wrap(min: f64, max: f64, v: f64) -> f64 {
  let range = max - min;
  ((v - min) % range + range) % range + min
}

/// Linear map [0, 1000] -> [0, 6], unclamped: velocities outside the input
/// range extrapolate past the output range, and scroll-up (negative
/// velocity) yields a negative factor.
pub fn velocity_factor(smoothed_velocity: f64) -> f64 {
  smoothed_velocity / VELOCITY_INPUT_MAX * VELOCITY_FACTOR_MAX
}

/// Damped-spring smoother for the raw scroll velocity, stepped once per
/// frame with the measured frame time.
pub struct Spring {
  stiffness: f64,
  damping: f64,
  value: f64,
  velocity: f64,
}

impl Spring {
  pub fn new(stiffness: f64, damping: f64) -> Self {
    Spring { stiffness, damping, value: 0.0, velocity: 0.0 }
  }

  /// Semi-implicit Euler step toward `target` over `dt` seconds.
  pub fn step(&mut self, target: f64, dt: f64) -> f64 {
    if dt <= 0.0 {
      return self.value;
    }
    let accel = self.stiffness * (target - self.value) - self.damping * self.velocity;
    self.velocity += accel * dt;
    self.value += self.velocity * dt;
    self.value
  }

  pub fn value(&self) -> f64 {
    self.value
  }
}

/// Derives page-scroll velocity from consecutive position samples.
pub struct ScrollVelocityTracker {
  last_position: f64,
}

impl ScrollVelocityTracker {
  pub fn new(initial_position: f64) -> Self {
    ScrollVelocityTracker { last_position: initial_position }
  }

  /// Velocity in units/sec between the previous sample and this one.
  pub fn sample(&mut self, position: f64, dt_seconds: f64) -> f64 {
    let velocity = if dt_seconds > 0.0 {
      (position - self.last_position) / dt_seconds
    } else {
      0.0
    };
    self.last_position = position;
    velocity
  }
}

/// Per-instance animation state of one carousel strip.
///
/// `offset` is expressed in percentage units of one card's width and only
/// converted to a displayable percentage through `display_percent`, so the
/// strip loops without the counter growing unbounded.
pub struct CarouselMotion {
  pub offset: f64,
  pub drift: f64,
  pub direction: f64,
  pub item_count: usize,
}

impl CarouselMotion {
  pub fn new(item_count: usize) -> Self {
    CarouselMotion {
      // forced initial offset, applied before the first paint
      offset: 6.0,
      drift: -DEFAULT_VELOCITY,
      // reversal on scroll-up was never shipped; stays forward
      direction: 1.0,
      item_count,
    }
  }

  /// Pointer entered the strip: stop drifting.
  pub fn pause(&mut self) {
    self.drift = 0.0;
  }

  /// Pointer left the strip: restore the base drift exactly.
  pub fn resume(&mut self) {
    self.drift = -DEFAULT_VELOCITY;
  }

  pub fn is_paused(&self) -> bool {
    self.drift == 0.0
  }

  /// Advances the offset by one frame of `delta_ms` elapsed time.
  /// `velocity_factor` amplifies the base drift multiplicatively, so fast
  /// page scrolling speeds the strip up (or briefly reverses it when the
  /// factor goes negative on scroll-up).
  pub fn tick(&mut self, delta_ms: f64, velocity_factor: f64) {
    let mut move_by = self.direction * self.drift * (delta_ms / 1000.0);
    move_by += self.direction * move_by * velocity_factor;

    // hard reset past the left boundary; display wrapping makes the
    // re-entry land close to the seam
    if self.offset <= -3.0 * self.item_count as f64 {
      self.offset = 11.0;
    }

    self.offset += move_by;
  }

  /// Offset wrapped into the displayable band, in percent of one card width.
  pub fn display_percent(&self) -> f64 {
    wrap(10.0, -3.0 * self.item_count as f64, self.offset)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const EPS: f64 = 1e-9;

  #[test]
  fn wrap_stays_in_band() {
    for count in [1usize, 3, 8, 20] {
      let floor = -3.0 * count as f64;
      for v in [-500.0, -31.0, -3.0, 0.0, 6.0, 9.99, 11.0, 250.0] {
        let wrapped = wrap(10.0, floor, v);
        assert!(
          wrapped >= floor - EPS && wrapped <= 10.0 + EPS,
          "wrap(10, {floor}, {v}) = {wrapped} left the band"
        );
      }
    }
  }

  #[test]
  fn wrap_is_identity_inside_band() {
    assert!((wrap(10.0, -9.0, 6.0) - 6.0).abs() < EPS);
    assert!((wrap(10.0, -9.0, -4.5) - -4.5).abs() < EPS);
  }

  #[test]
  fn velocity_factor_maps_linearly() {
    assert!((velocity_factor(0.0) - 0.0).abs() < EPS);
    assert!((velocity_factor(500.0) - 3.0).abs() < EPS);
    assert!((velocity_factor(1000.0) - 6.0).abs() < EPS);
  }

  #[test]
  fn velocity_factor_extrapolates_unclamped() {
    assert!((velocity_factor(2000.0) - 12.0).abs() < EPS);
    assert!((velocity_factor(-500.0) - -3.0).abs() < EPS);
  }

  #[test]
  fn initial_state_matches_first_paint() {
    let motion = CarouselMotion::new(3);
    assert!((motion.offset - 6.0).abs() < EPS);
    assert!((motion.drift - -0.4).abs() < EPS);
    assert!((motion.display_percent() - 6.0).abs() < EPS);
  }

  #[test]
  fn tick_integrates_base_drift() {
    let mut motion = CarouselMotion::new(5);
    motion.tick(1000.0, 0.0);
    assert!((motion.offset - (6.0 - 0.4)).abs() < EPS);
  }

  #[test]
  fn velocity_factor_amplifies_drift() {
    let mut motion = CarouselMotion::new(5);
    motion.tick(1000.0, 3.0);
    // base move of -0.4 scaled by (1 + factor)
    assert!((motion.offset - (6.0 - 0.4 * 4.0)).abs() < EPS);
  }

  #[test]
  fn pause_zeroes_movement() {
    let mut motion = CarouselMotion::new(5);
    motion.pause();
    let before = motion.offset;
    motion.tick(1000.0, 50.0);
    assert!((motion.offset - before).abs() < EPS);
  }

  #[test]
  fn resume_restores_base_drift() {
    let mut motion = CarouselMotion::new(5);
    for _ in 0..4 {
      motion.pause();
      motion.resume();
    }
    assert!((motion.drift - -DEFAULT_VELOCITY).abs() < EPS);
  }

  #[test]
  fn offset_resets_past_left_boundary() {
    let mut motion = CarouselMotion::new(4);
    motion.offset = -12.0001;
    motion.tick(16.0, 0.0);
    let expected_move = -0.4 * (16.0 / 1000.0);
    assert!((motion.offset - (11.0 + expected_move)).abs() < EPS);
  }

  #[test]
  fn display_percent_stays_in_band_while_drifting() {
    let mut motion = CarouselMotion::new(6);
    let floor = -3.0 * 6.0;
    for _ in 0..10_000 {
      motion.tick(16.0, 2.0);
      let shown = motion.display_percent();
      assert!(shown >= floor - EPS && shown <= 10.0 + EPS);
    }
  }

  #[test]
  fn spring_smooths_a_velocity_step() {
    let mut spring = Spring::new(400.0, 50.0);
    let first = spring.step(1000.0, 0.016);
    assert!(first > 0.0 && first < 1000.0, "first step should undershoot, got {first}");
  }

  #[test]
  fn spring_converges_to_target() {
    let mut spring = Spring::new(400.0, 50.0);
    for _ in 0..600 {
      spring.step(1000.0, 0.016);
    }
    assert!((spring.value() - 1000.0).abs() < 1.0);
  }

  #[test]
  fn spring_ignores_zero_dt() {
    let mut spring = Spring::new(400.0, 50.0);
    spring.step(1000.0, 0.016);
    let held = spring.value();
    assert!((spring.step(2000.0, 0.0) - held).abs() < EPS);
  }

  #[test]
  fn tracker_derives_velocity_from_samples() {
    let mut tracker = ScrollVelocityTracker::new(100.0);
    assert!((tracker.sample(150.0, 0.1) - 500.0).abs() < EPS);
    assert!((tracker.sample(150.0, 0.1) - 0.0).abs() < EPS);
    assert!((tracker.sample(100.0, 0.1) - -500.0).abs() < EPS);
  }

  #[test]
  fn tracker_zero_dt_yields_zero_velocity() {
    let mut tracker = ScrollVelocityTracker::new(0.0);
    assert!((tracker.sample(50.0, 0.0) - 0.0).abs() < EPS);
  }
}
