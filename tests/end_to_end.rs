use oxidescope::data::loader::read_csv;
use oxidescope::{CursorLabel, CursorState, Session, TimeUnit};

const CAPTURE: &str = "Time (s),Current (mA)\n0.0,1\n0.001,5\n0.002,9\n0.003,3\n";

fn session() -> Session {
    let mut s = Session::default();
    let table = read_csv(CAPTURE.as_bytes()).unwrap();
    s.load(&table).unwrap();
    s
}

#[test]
fn global_stats_of_capture() {
    let s = session();
    let stats = s.global_stats().unwrap();
    assert_eq!(stats.count, 4);
    assert_eq!(stats.min, 1.0);
    assert_eq!(stats.max, 9.0);
    assert!((stats.average - 4.5).abs() < 1e-12);
}

#[test]
fn two_cursor_measurement() {
    let mut s = session();

    let a = s.place_cursor(0.0015).unwrap();
    assert_eq!(a.cursor.label, CursorLabel::A);
    assert_eq!(a.index, 1);
    assert_eq!(a.cursor.time, 0.001);
    assert_eq!(a.cursor.amplitude, 5.0);
    assert_eq!(a.state, CursorState::HasA);
    assert!(a.analysis.is_none());

    let b = s.place_cursor(0.0029).unwrap();
    assert_eq!(b.cursor.label, CursorLabel::B);
    assert_eq!(b.index, 3);
    assert_eq!(b.cursor.time, 0.003);
    assert_eq!(b.state, CursorState::HasAB);

    let r = b.analysis.expect("analysis after B");
    assert_eq!(r.count, 3);
    assert_eq!(r.max, 9.0);
    assert!((r.average - 17.0 / 3.0).abs() < 1e-9);
    assert!((r.time_delta - 0.002).abs() < 1e-15);
    assert_eq!(r.time_delta_format.unit, TimeUnit::Milliseconds);
    assert!(r.time_delta_format.precision >= 6);
    assert_eq!(r.time_delta_formatted, "2.000000 ms");
    assert_eq!(s.analysis(), Some(&r));
}

#[test]
fn cursors_on_same_sample_give_no_result() {
    let mut s = session();
    s.place_cursor(0.0021).unwrap();
    let b = s.place_cursor(0.0019).unwrap();
    assert_eq!(b.state, CursorState::HasAB);
    assert!(b.analysis.is_none());
}

#[test]
fn reload_clears_cursors_and_analysis() {
    let mut s = session();
    s.place_cursor(0.0).unwrap();
    s.place_cursor(0.003).unwrap();
    assert!(s.analysis().is_some());

    let table = read_csv("Time (s),Current (mA)\n0,2\n1,4\n".as_bytes()).unwrap();
    s.load(&table).unwrap();
    assert_eq!(s.cursor_state(), CursorState::Empty);
    assert!(s.analysis().is_none());
    assert_eq!(s.global_stats().unwrap().count, 2);
}

#[test]
fn clear_cursors_and_clear_series() {
    let mut s = session();
    s.place_cursor(0.0).unwrap();
    s.place_cursor(0.002).unwrap();

    s.clear_cursors();
    assert_eq!(s.cursor_state(), CursorState::Empty);
    assert!(s.analysis().is_none());
    assert!(s.global_stats().is_some());

    s.place_cursor(0.0).unwrap();
    s.clear_series();
    assert_eq!(s.cursor_state(), CursorState::Empty);
    assert!(s.series().is_none());
    assert!(s.global_stats().is_none());
    let (time, amplitude) = s.series_arrays();
    assert!(time.is_empty() && amplitude.is_empty());
}

#[test]
fn nan_and_missing_amplitudes_are_excluded() {
    let csv = "time (S) , CURRENT(mA)\n0.0,1\n0.001,NaN\n0.002,\n0.003,3\n";
    let mut s = Session::default();
    let summary = s.load(&read_csv(csv.as_bytes()).unwrap()).unwrap();
    assert_eq!(summary.samples, 2);
    assert_eq!(summary.dropped_rows, 2);
    let stats = s.global_stats().unwrap();
    assert_eq!(stats.count, 2);
    assert_eq!(stats.average, 2.0);
    assert_eq!(s.series_arrays().0, &[0.0, 0.003]);
}
