use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CursorLabel {
    A,
    B,
}

impl std::fmt::Display for CursorLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CursorLabel::A => write!(f, "A"),
            CursorLabel::B => write!(f, "B"),
        }
    }
}

/// A measurement cursor. Always holds the values of an existing sample,
/// never the raw query time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Cursor {
    pub time: f64,
    pub amplitude: f64,
    pub label: CursorLabel,
}

/// Which cursors are placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CursorState {
    Empty,
    HasA,
    HasAB,
}

/// The A/B cursor pair.
///
/// Placement cycles `Empty -> HasA -> HasAB -> HasA -> ...`: a placement while
/// both cursors exist starts a new pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CursorPair {
    #[default]
    Empty,
    HasA(Cursor),
    HasAB(Cursor, Cursor),
}

impl CursorPair {
    /// Place a cursor on the sample `(time, amplitude)` and return it.
    pub fn place(&mut self, time: f64, amplitude: f64) -> Cursor {
        match *self {
            CursorPair::HasA(a) => {
                let b = Cursor {
                    time,
                    amplitude,
                    label: CursorLabel::B,
                };
                *self = CursorPair::HasAB(a, b);
                b
            }
            CursorPair::Empty | CursorPair::HasAB(..) => {
                let a = Cursor {
                    time,
                    amplitude,
                    label: CursorLabel::A,
                };
                *self = CursorPair::HasA(a);
                a
            }
        }
    }

    pub fn clear(&mut self) {
        *self = CursorPair::Empty;
    }

    pub fn state(&self) -> CursorState {
        match self {
            CursorPair::Empty => CursorState::Empty,
            CursorPair::HasA(_) => CursorState::HasA,
            CursorPair::HasAB(..) => CursorState::HasAB,
        }
    }

    pub fn a(&self) -> Option<&Cursor> {
        match self {
            CursorPair::Empty => None,
            CursorPair::HasA(a) | CursorPair::HasAB(a, _) => Some(a),
        }
    }

    pub fn b(&self) -> Option<&Cursor> {
        match self {
            CursorPair::HasAB(_, b) => Some(b),
            _ => None,
        }
    }

    /// Both cursors, when the pair is complete.
    pub fn both(&self) -> Option<(&Cursor, &Cursor)> {
        match self {
            CursorPair::HasAB(a, b) => Some((a, b)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement_cycle() {
        let mut pair = CursorPair::default();
        assert_eq!(pair.state(), CursorState::Empty);

        let a = pair.place(1.0, 10.0);
        assert_eq!(a.label, CursorLabel::A);
        assert_eq!(pair.state(), CursorState::HasA);
        assert!(pair.b().is_none());

        let b = pair.place(2.0, 20.0);
        assert_eq!(b.label, CursorLabel::B);
        assert_eq!(pair.state(), CursorState::HasAB);
        assert_eq!(pair.a().map(|c| c.time), Some(1.0));

        // Third placement starts a new pair.
        let a2 = pair.place(3.0, 30.0);
        assert_eq!(a2.label, CursorLabel::A);
        assert_eq!(pair.state(), CursorState::HasA);
        assert_eq!(pair.a().map(|c| c.time), Some(3.0));
        assert!(pair.b().is_none());
    }

    #[test]
    fn clear_from_any_state() {
        let mut pair = CursorPair::default();
        pair.place(1.0, 1.0);
        pair.place(2.0, 2.0);
        pair.clear();
        assert_eq!(pair, CursorPair::Empty);
        assert!(pair.both().is_none());
    }
}
