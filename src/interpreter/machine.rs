use std::collections::{BTreeMap, HashMap};

/// Read-only view of the emulated machine used while evaluating.
///
/// Registers are looked up when an expression is evaluated, not when it is
/// tokenized, so the same expression can yield different values as the
/// machine runs.
pub trait MachineState {
    /// Returns the current value of the register `name`, or `None` if the
    /// machine has no such register.
    ///
    /// `name` is the register token as typed, including its `$` sigil.
    fn lookup_register(&self, name: &str) -> Option<i64>;

    /// Returns the machine word stored at `addr`, or `None` if the address is
    /// not readable.
    fn read_memory(&self, _addr: u64) -> Option<i64> {
        None
    }
}

impl MachineState for HashMap<String, i64> {
    fn lookup_register(&self, name: &str) -> Option<i64> {
        self.get(name).copied()
    }
}

/// A frozen copy of register values and memory words.
///
/// Used by the command-line front end and by tests in place of a live
/// emulator. Register names are stored with their `$` sigil.
///
/// # Example
/// ```
/// use dbgexpr::interpreter::machine::{MachineSnapshot, MachineState};
///
/// let machine = MachineSnapshot::new().with_register("$a0", 5)
///                                     .with_memory(0x8000_0000, 42);
/// assert_eq!(machine.lookup_register("$a0"), Some(5));
/// assert_eq!(machine.read_memory(0x8000_0000), Some(42));
/// assert_eq!(machine.lookup_register("$a1"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MachineSnapshot {
    registers: BTreeMap<String, i64>,
    memory:    BTreeMap<u64, i64>,
}

impl MachineSnapshot {
    /// Creates a snapshot with no registers and no readable memory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets register `name`. A missing `$` sigil is added.
    pub fn set_register(&mut self, name: &str, value: i64) {
        let name = if name.starts_with('$') {
            name.to_string()
        } else {
            format!("${name}")
        };
        self.registers.insert(name, value);
    }

    /// Stores `value` as the word at `addr`.
    pub fn set_memory(&mut self, addr: u64, value: i64) {
        self.memory.insert(addr, value);
    }

    /// Builder form of [`MachineSnapshot::set_register`].
    #[must_use]
    pub fn with_register(mut self, name: &str, value: i64) -> Self {
        self.set_register(name, value);
        self
    }

    /// Builder form of [`MachineSnapshot::set_memory`].
    #[must_use]
    pub fn with_memory(mut self, addr: u64, value: i64) -> Self {
        self.set_memory(addr, value);
        self
    }
}

impl MachineState for MachineSnapshot {
    fn lookup_register(&self, name: &str) -> Option<i64> {
        self.registers.get(name).copied()
    }

    fn read_memory(&self, addr: u64) -> Option<i64> {
        self.memory.get(&addr).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigil_is_added_once() {
        let mut machine = MachineSnapshot::new();
        machine.set_register("pc", 0x100);
        machine.set_register("$sp", 0x200);

        assert_eq!(machine.lookup_register("$pc"), Some(0x100));
        assert_eq!(machine.lookup_register("$sp"), Some(0x200));
        assert_eq!(machine.lookup_register("pc"), None);
    }

    #[test]
    fn map_has_no_memory() {
        let regs = HashMap::from([("$a0".to_string(), 5)]);
        assert_eq!(regs.lookup_register("$a0"), Some(5));
        assert_eq!(regs.read_memory(0), None);
    }
}
