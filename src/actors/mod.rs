pub mod boat;
pub mod parachutist;
