// 投放节奏：每轮循环随机决定投放人数，按飞机速度错开投放时刻，
// 所有事件都放在待触发列表里由游戏时钟轮询
use rand::Rng;

use crate::config::SpawnConfig;

// 循环间隔下限，避免间隔为零时同一帧内无限触发
const MIN_INTERVAL_MS: f64 = 1.0;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SpawnEvent {
    Cycle,
    Release,
}

#[derive(Clone, Copy, Debug)]
struct Pending {
    fire_at: f64,
    seq: u64,
    event: SpawnEvent,
}

#[derive(Clone, Debug)]
pub struct SpawnSchedule {
    interval_ms: f64,
    release_window_ms: f64,
    max_per_cycle: u32,
    pending: Vec<Pending>,
    seq: u64,
}

impl SpawnSchedule {
    pub fn new(config: &SpawnConfig) -> Self {
        Self {
            interval_ms: config.interval_ms.max(MIN_INTERVAL_MS),
            release_window_ms: config.release_window_ms.max(0.0),
            max_per_cycle: config.max_per_cycle.max(1),
            pending: Vec::new(),
            seq: 0,
        }
    }

    // 重新开始投放循环，先前的待触发事件全部作废
    pub fn start(&mut self, now: f64) {
        self.cancel();
        self.push(now + self.interval_ms, SpawnEvent::Cycle);
    }

    pub fn cancel(&mut self) {
        self.pending.clear();
    }

    #[cfg(test)]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    #[cfg(test)]
    pub fn pending_releases(&self) -> usize {
        self.pending
            .iter()
            .filter(|p| p.event == SpawnEvent::Release)
            .count()
    }

    // 按时间顺序触发所有到点事件，返回到点的投放数；循环触发时读取飞机当前速度
    pub fn poll<R: Rng>(&mut self, now: f64, plane_speed: f32, rng: &mut R) -> usize {
        let mut released = 0;
        while let Some(idx) = self.next_due(now) {
            let entry = self.pending.swap_remove(idx);
            match entry.event {
                SpawnEvent::Cycle => {
                    let count = rng.gen_range(1..=self.max_per_cycle);
                    let spacing = release_spacing(self.release_window_ms, plane_speed);
                    for i in 0..count {
                        self.push(entry.fire_at + i as f64 * spacing, SpawnEvent::Release);
                    }
                    self.push(entry.fire_at + self.interval_ms, SpawnEvent::Cycle);
                }
                SpawnEvent::Release => released += 1,
            }
        }
        released
    }

    fn push(&mut self, fire_at: f64, event: SpawnEvent) {
        self.pending.push(Pending {
            fire_at,
            seq: self.seq,
            event,
        });
        self.seq += 1;
    }

    // 同一时刻按入队顺序触发
    fn next_due(&self, now: f64) -> Option<usize> {
        self.pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.fire_at <= now)
            .min_by(|(_, a), (_, b)| a.fire_at.total_cmp(&b.fire_at).then(a.seq.cmp(&b.seq)))
            .map(|(idx, _)| idx)
    }
}

// 飞机速度非正时不再错开，全部立即投放
fn release_spacing(window_ms: f64, plane_speed: f32) -> f64 {
    if plane_speed > 0.0 && plane_speed.is_finite() {
        window_ms / plane_speed as f64
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn schedule() -> SpawnSchedule {
        SpawnSchedule::new(&SpawnConfig::default())
    }

    #[test]
    fn test_nothing_before_first_interval() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut spawns = schedule();
        spawns.start(0.0);
        assert_eq!(spawns.poll(1999.0, 2.0, &mut rng), 0);
        assert_eq!(spawns.pending(), 1);
    }

    #[test]
    fn test_cycle_releases_first_drop_immediately() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut spawns = schedule();
        spawns.start(0.0);
        assert_eq!(spawns.poll(2000.0, 2.0, &mut rng), 1);
        // 剩余投放 + 下一轮循环
        let remaining = spawns.pending_releases();
        assert!(remaining <= 2);
        assert_eq!(spawns.pending(), remaining + 1);
    }

    #[test]
    fn test_releases_spaced_by_plane_speed() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut spawns = schedule();
            spawns.start(0.0);
            let mut total = spawns.poll(2000.0, 4.0, &mut rng);
            let planned = total + spawns.pending_releases();
            // 速度为 4 时间隔为 500ms
            for i in 1..planned {
                let at = 2000.0 + i as f64 * 500.0;
                assert_eq!(spawns.poll(at - 1.0, 4.0, &mut rng), 0);
                total += spawns.poll(at, 4.0, &mut rng);
                assert_eq!(total, i + 1);
            }
            assert_eq!(spawns.pending_releases(), 0);
        }
    }

    #[test]
    fn test_cycle_count_covers_one_to_max() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut spawns = schedule();
        let mut seen = [false; 4];
        for round in 0..200 {
            let now = round as f64 * 10_000.0;
            spawns.start(now);
            spawns.poll(now + 2000.0, 1.0, &mut rng);
            let count = 1 + spawns.pending_releases();
            assert!((1..=3).contains(&count));
            seen[count] = true;
        }
        assert!(seen[1] && seen[2] && seen[3]);
    }

    #[test]
    fn test_long_gap_fires_every_missed_cycle() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut spawns = schedule();
        spawns.start(0.0);
        // 三次循环：2000、4000、6000，每轮至少一次投放
        let released = spawns.poll(6000.0, 1000.0, &mut rng);
        assert!(released >= 3);
        assert_eq!(spawns.pending() - spawns.pending_releases(), 1);
    }

    #[test]
    fn test_zero_interval_still_returns() {
        let config = SpawnConfig {
            interval_ms: 0.0,
            ..SpawnConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(6);
        let mut spawns = SpawnSchedule::new(&config);
        spawns.start(0.0);
        // 间隔被压到下限，16ms 内最多触发有限轮循环
        let released = spawns.poll(16.0, 2.0, &mut rng);
        assert!(released >= 1);
        assert_eq!(spawns.pending() - spawns.pending_releases(), 1);
    }

    #[test]
    fn test_stalled_plane_releases_without_spacing() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut spawns = schedule();
        spawns.start(0.0);
        let mut released = 0;
        for step in 1..=10 {
            released += spawns.poll(step as f64 * 2000.0, 0.0, &mut rng);
        }
        // 每轮的投放全部到点，只剩下一轮循环
        assert!(released >= 10);
        assert_eq!(spawns.pending_releases(), 0);
        assert_eq!(spawns.pending(), 1);
    }

    #[test]
    fn test_cancel_drops_pending() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut spawns = schedule();
        spawns.start(0.0);
        spawns.poll(2000.0, 2.0, &mut rng);
        spawns.cancel();
        assert_eq!(spawns.pending(), 0);
        assert_eq!(spawns.poll(100_000.0, 2.0, &mut rng), 0);
    }
}
