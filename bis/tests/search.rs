//! Tests for hybrid search
//! 混合查找测试

use aok::{OK, Void};
use bis::{Conf, Config, Fallback, Series, TimedValue, binary_all, estimate, find, linear, trace};
use log::trace;

#[static_init::constructor(0)]
extern "C" fn _log_init() {
  log_init::init();
}

/// i-th hourly timestamp, months of 28 days, starting 2000-01-01
/// 第 i 个整点时间戳，每月 28 天，从 2000-01-01 开始
fn stamp(i: usize) -> String {
  let (y, r) = (i / 8064, i % 8064);
  let (m, r) = (r / 672, r % 672);
  let (d, h) = (r / 24, r % 24);
  format!("{:04}-{:02}-{:02}T{:02}:00", 2000 + y, m + 1, d + 1, h)
}

fn series_of(li: &[&str]) -> Vec<TimedValue<f64>> {
  li.iter()
    .enumerate()
    .map(|(i, ts)| TimedValue::new(*ts, i as f64))
    .collect()
}

#[test]
fn test_single() -> Void {
  let li = vec![TimedValue::new("2014-01-01T00", 5.0)];

  assert_eq!(find(&li, "2014-01-01T00"), Some(0));
  assert_eq!(find(&li, "2014-01-02T00"), None);
  assert_eq!(find(&li, "2013-12-31T23"), None);

  trace!("single passed");
  OK
}

#[test]
fn test_five_days() -> Void {
  let li = series_of(&[
    "2014-01-01",
    "2014-01-02",
    "2014-01-03",
    "2014-01-04",
    "2014-01-05",
  ]);

  assert_eq!(find(&li, "2014-01-03"), Some(2));
  for (i, r) in li.iter().enumerate() {
    assert_eq!(find(&li, &r.ts), Some(i), "ts={}", r.ts);
  }
  assert_eq!(find(&li, "2014-01-06"), None);
  assert_eq!(find(&li, "2014-01-00"), None);
  assert_eq!(find(&li, "2014-01-03T12"), None);

  trace!("five_days passed");
  OK
}

#[test]
fn test_empty() -> Void {
  let li: Vec<TimedValue<f64>> = Vec::new();

  assert_eq!(find(&li, "2014-01-01T00"), None);
  assert_eq!(binary_all(&li, "2014-01-01T00"), None);
  assert_eq!(linear(&li, 0, 0, "2014-01-01T00"), None);
  let t = trace(&li, "2014-01-01T00", &Config::default());
  assert_eq!(t.iterations, 0);
  assert_eq!(t.fallback, None);

  trace!("empty passed");
  OK
}

#[test]
fn test_same_prefix() -> Void {
  // Every key shares one date, interpolation degenerates to the midpoint
  // 所有键同一日期，插值退化为中点
  let li: Vec<TimedValue<f64>> = (0..24 * 60)
    .map(|m| TimedValue::new(format!("2014-05-15T{:02}:{:02}", m / 60, m % 60), m as f64))
    .collect();

  for (i, r) in li.iter().enumerate() {
    assert_eq!(find(&li, &r.ts), Some(i), "ts={}", r.ts);
  }
  assert_eq!(find(&li, "2014-05-15T12:30:30"), None);
  assert_eq!(find(&li, "2014-05-14T23:59"), None);
  assert_eq!(find(&li, "2014-05-16T00:00"), None);

  trace!("same_prefix passed");
  OK
}

#[test]
fn test_multi_year() -> Void {
  let li: Vec<TimedValue<f64>> = (0..50_000).map(|i| TimedValue::new(stamp(i), i as f64)).collect();

  for i in (0..50_000).step_by(7) {
    assert_eq!(find(&li, &li[i].ts), Some(i));
  }
  assert_eq!(find(&li, "1999-12-31T23:00"), None);
  assert_eq!(find(&li, "2099-01-01T00:00"), None);
  assert_eq!(find(&li, "2003-02-03T04:30"), None);

  trace!("multi_year passed");
  OK
}

#[test]
fn test_equiv_binary() -> Void {
  let mut rng = fastrand::Rng::with_seed(42);

  for _ in 0..50 {
    let n = rng.usize(0..2_000);
    let mut idx: Vec<usize> = (0..n).map(|_| rng.usize(0..200_000)).collect();
    idx.sort_unstable();
    idx.dedup();
    let li: Vec<String> = idx.iter().map(|&i| stamp(i)).collect();

    for _ in 0..200 {
      let target = stamp(rng.usize(0..200_000));
      assert_eq!(
        find(&li, &target),
        binary_all(&li, &target),
        "n={}, target={target}",
        li.len()
      );
    }
    for ts in &li {
      assert_eq!(find(&li, ts), binary_all(&li, ts));
    }
  }

  trace!("equiv_binary passed");
  OK
}

#[test]
fn test_clustered_fallback() -> Void {
  // One day per year boundary, thousands of keys inside a single day
  // 大量键集中在同一天，仅两端跨年
  let mut li: Vec<String> = vec!["2000-01-01T00:00".into()];
  li.extend((0..3_000).map(|s| format!("2014-05-15T{:02}:{:02}:{:02}", s / 3600, s / 60 % 60, s % 60)));
  li.push("2099-12-31T23:59".into());

  let config = Config::default();
  let mut fell_back = 0;
  for (i, ts) in li.iter().enumerate() {
    let t = trace(&li, ts, &config);
    assert_eq!(t.pos, Some(i), "ts={ts}");
    if t.fallback.is_some() {
      fell_back += 1;
    }
  }
  assert!(fell_back > 0);

  let t = trace(&li, "2014-05-15T00:10:00.5", &config);
  assert_eq!(t.pos, None);

  trace!("clustered_fallback passed, {fell_back} fallbacks");
  OK
}

#[test]
fn test_stall_fallback() -> Void {
  let li: Vec<String> = (0..1_000).map(stamp).collect();
  let config: Config = [Conf::StallLimit(1)].as_slice().into();

  // The first miss never shrinks the window, so one stall is enough
  // 第一次未命中时窗口必然未收缩，因此一次停滞即触发
  for (i, ts) in li.iter().enumerate() {
    let t = trace(&li, ts, &config);
    assert_eq!(t.pos, Some(i));
    if t.iterations > 0 {
      assert_eq!(t.fallback, Some(Fallback::Stall));
      assert_eq!(t.iterations, 1);
    }
  }
  let t = trace(&li, "2000-01-01T00:30", &config);
  assert_eq!(t.pos, None);
  assert_eq!(t.fallback, Some(Fallback::Stall));

  trace!("stall_fallback passed");
  OK
}

#[test]
fn test_budget_and_narrow_fallback() -> Void {
  let li = vec!["2014-01-01T00".to_string()];

  let t = trace(&li, "2014-01-02T00", &Config::default());
  assert_eq!(t.pos, None);
  assert_eq!(t.fallback, Some(Fallback::Narrow));

  let config: Config = [Conf::ExtraIter(0)].as_slice().into();
  let t = trace(&li, "2014-01-02T00", &config);
  assert_eq!(t.pos, None);
  assert_eq!(t.fallback, Some(Fallback::Budget));

  trace!("budget_and_narrow_fallback passed");
  OK
}

#[test]
fn test_duplicates() -> Void {
  let li = series_of(&[
    "2014-01-01",
    "2014-01-02",
    "2014-01-02",
    "2014-01-02",
    "2014-01-03",
    "2015-06-01",
  ]);

  let pos = find(&li, "2014-01-02");
  assert!(matches!(pos, Some(1..=3)));
  assert_eq!(find(&li, "2015-06-01"), Some(5));
  assert_eq!(find(&li, "2014-06-01"), None);

  trace!("duplicates passed");
  OK
}

#[test]
fn test_estimate() -> Void {
  let li = series_of(&["2010-01-01", "2011-01-01", "2012-01-01", "2013-01-01", "2020-01-01"]);

  assert_eq!(estimate(&li, 0, 4, "2009-01-01"), 0);
  assert_eq!(estimate(&li, 0, 4, "2010-01-01"), 0);
  assert_eq!(estimate(&li, 0, 4, "2021-01-01"), 4);
  // (2015 - 2010) / (2020 - 2010) = 0.5
  assert_eq!(estimate(&li, 0, 4, "2015-01-01"), 2);
  // (2012 - 2010) / 10 = 0.2 → 0 + floor(0.8)
  assert_eq!(estimate(&li, 0, 4, "2012-06-01"), 0);
  // Same year on both ends → midpoint
  // 两端同年 → 中点
  assert_eq!(estimate(&li, 1, 1, "2011-01-01"), 1);
  // Short keys → midpoint
  // 键过短 → 中点
  let short = series_of(&["a", "b", "c", "d", "e"]);
  assert_eq!(estimate(&short, 0, 4, "c"), 2);

  trace!("estimate passed");
  OK
}

#[test]
fn test_linear() -> Void {
  let li = series_of(&["2014-01-01", "2014-01-02", "2014-01-02", "2014-01-03"]);

  assert_eq!(linear(&li, 0, 3, "2014-01-02"), Some(1));
  assert_eq!(linear(&li, 2, 3, "2014-01-02"), Some(2));
  assert_eq!(linear(&li, 0, 0, "2014-01-02"), None);
  assert_eq!(linear(&li, 3, 1, "2014-01-03"), None);
  assert_eq!(linear(&li, 0, usize::MAX, "2014-01-03"), Some(3));

  trace!("linear passed");
  OK
}

#[test]
fn test_series() -> Void {
  let li = series_of(&["2014-01-03", "2014-01-01", "2014-01-02"]);
  let series = Series::sort(li.clone(), &[Conf::MinWindow(1)]);

  assert_eq!(series.config().min_window, 1);
  assert_eq!(series.find("2014-01-01"), Some(0));
  assert_eq!(series.get("2014-01-03").map(|r| r.val), Some(0.0));
  assert_eq!(series.get("2014-01-04"), None);

  let err = Series::from_sorted(li, &[]);
  assert!(matches!(err, Err(bis::Error::NotSorted { at: 1 })));

  let ok = Series::from_sorted(series.into_inner(), &[])?;
  assert_eq!(ok.len(), 3);

  trace!("series passed");
  OK
}
