//! Quantum numbers for the displayed state

/// Lowest selectable principal quantum number
pub const N_MIN: u32 = 1;
/// Highest selectable principal quantum number
pub const N_MAX: u32 = 4;
/// Highest orbital quantum number offered by the slider
pub const L_MAX: u32 = 3;

/// The (n, l) pair currently on display.
///
/// Fields are private so the invariant l < n cannot be broken from outside:
/// every mutation clamps. Only the controller mutates this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantumState {
    n: u32,
    l: u32,
}

impl QuantumState {
    pub fn new(n: u32, l: u32) -> Self {
        let n = n.clamp(N_MIN, N_MAX);
        Self { n, l: l.min(n - 1) }
    }

    pub fn n(&self) -> u32 {
        self.n
    }

    pub fn l(&self) -> u32 {
        self.l
    }

    /// Change n, pulling l down to n - 1 if it would become invalid
    pub fn set_n(&mut self, n: u32) {
        self.n = n.clamp(N_MIN, N_MAX);
        self.l = self.l.min(self.n - 1);
    }

    /// Change l, clamped to the valid range for the current n
    pub fn set_l(&mut self, l: u32) {
        self.l = l.min(L_MAX).min(self.n - 1);
    }

    /// Number of radial nodes, n - l - 1
    pub fn radial_nodes(&self) -> u32 {
        self.n - self.l - 1
    }

    /// Subshell name for the l slider label
    pub fn subshell_name(&self) -> &'static str {
        match self.l {
            0 => "s-orbital",
            1 => "p-orbital",
            2 => "d-orbital",
            _ => "f-orbital",
        }
    }
}

impl Default for QuantumState {
    /// Initial state of the session
    fn default() -> Self {
        Self::new(3, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructor_clamps_l_below_n() {
        let s = QuantumState::new(2, 3);
        assert_eq!(s.n(), 2);
        assert_eq!(s.l(), 1);
    }

    #[test]
    fn lowering_n_clamps_l() {
        let mut s = QuantumState::new(3, 2);
        s.set_n(1);
        assert_eq!(s.n(), 1);
        assert_eq!(s.l(), 0);
    }

    #[test]
    fn radial_nodes_never_negative() {
        for n in N_MIN..=N_MAX {
            for l in 0..n {
                let s = QuantumState::new(n, l);
                assert_eq!(s.radial_nodes(), n - l - 1);
            }
        }
    }

    #[test]
    fn subshell_names() {
        assert_eq!(QuantumState::new(4, 0).subshell_name(), "s-orbital");
        assert_eq!(QuantumState::new(4, 1).subshell_name(), "p-orbital");
        assert_eq!(QuantumState::new(4, 2).subshell_name(), "d-orbital");
        assert_eq!(QuantumState::new(4, 3).subshell_name(), "f-orbital");
    }
}
