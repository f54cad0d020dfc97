/// Asserts that the named critter is registered and dead.
#[macro_export]
macro_rules! assert_dead {
    ($world:expr, $name:expr) => {
        let critter = $world.critter($name).expect("Critter not found in world");
        assert!(critter.dead, "Critter {} should be dead but is alive", $name);
    };
}

/// Asserts that the named critter is registered and alive.
#[macro_export]
macro_rules! assert_alive {
    ($world:expr, $name:expr) => {
        let critter = $world.critter($name).expect("Critter not found in world");
        assert!(!critter.dead, "Critter {} should be alive but is dead", $name);
    };
}

/// Asserts the number of living critters.
#[macro_export]
macro_rules! assert_living {
    ($world:expr, $count:expr) => {
        assert_eq!($world.living_count(), $count, "Living critter count mismatch");
    };
}

/// Asserts that two floats agree to within `1e-6`.
#[macro_export]
macro_rules! assert_close {
    ($left:expr, $right:expr) => {
        let (l, r): (f64, f64) = ($left, $right);
        assert!((l - r).abs() < 1e-6, "{} is not close to {}", l, r);
    };
}

/// Asserts that every entity sits inside the world bounds.
#[macro_export]
macro_rules! assert_in_bounds {
    ($world:expr) => {
        let (w, h) = ($world.width, $world.height);
        let inside = |p: critters_lib::model::data::Point| p.x >= 0.0 && p.x < w && p.y >= 0.0 && p.y < h;
        for c in &$world.critters {
            assert!(inside(c.location), "{} escaped to {:?}", c.name, c.location);
        }
        for f in &$world.food {
            assert!(inside(f.location), "food escaped to {:?}", f.location);
        }
    };
}
