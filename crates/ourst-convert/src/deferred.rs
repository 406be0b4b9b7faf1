//! Output that must appear at the end of the current output unit.

/// Ordered queue of line blocks appended after an output unit's body.
///
/// One queue belongs to exactly one output unit. Blocks keep the order in
/// which they were pushed; pushing a block identical to one already queued is
/// a no-op, since substitution definitions must be unique within a document.
#[derive(Debug, Default)]
pub struct DeferredQueue {
    blocks: Vec<Vec<String>>,
}

impl DeferredQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a block. Returns `false` if it was empty or already queued.
    pub fn push_block(&mut self, block: Vec<String>) -> bool {
        if block.is_empty() || self.blocks.contains(&block) {
            return false;
        }
        self.blocks.push(block);
        true
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Number of queued blocks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// All queued lines in push order.
    #[must_use]
    pub fn into_lines(self) -> Vec<String> {
        self.blocks.into_iter().flatten().collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn block(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|line| (*line).to_owned()).collect()
    }

    #[test]
    fn test_preserves_push_order() {
        let mut queue = DeferredQueue::new();
        assert!(queue.push_block(block(&[".. |b| image:: b", ""])));
        assert!(queue.push_block(block(&[".. |a| image:: a", ""])));

        assert_eq!(queue.len(), 2);
        assert_eq!(
            queue.into_lines(),
            block(&[".. |b| image:: b", "", ".. |a| image:: a", ""])
        );
    }

    #[test]
    fn test_skips_duplicates_and_empty_blocks() {
        let mut queue = DeferredQueue::new();
        assert!(queue.push_block(block(&["x"])));
        assert!(!queue.push_block(block(&["x"])));
        assert!(!queue.push_block(Vec::new()));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_empty_queue() {
        let queue = DeferredQueue::new();
        assert!(queue.is_empty());
        assert!(queue.into_lines().is_empty());
    }
}
