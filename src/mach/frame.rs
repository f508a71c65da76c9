use super::var::NumberVariable;
use super::Block;
use crate::lang::Position;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameKind {
    If,
    Else,
    While,
    Repeat,
    For {
        var: NumberVariable,
        end: f64,
        step: f64,
    },
}

/// ## Control-flow frame
///
/// One open block awaiting its `End`.

#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub kind: FrameKind,
    pub position: Position,
    pub last_condition: bool,
    /// Statement index of the opening keyword.
    pub opening: usize,
    /// Where to continue when the block repeats.
    pub resume: usize,
    pub block: Option<Block>,
}

impl Frame {
    pub fn new(kind: FrameKind, position: Position, opening: usize, block: Option<Block>) -> Frame {
        Frame {
            kind,
            position,
            last_condition: true,
            opening,
            resume: opening + 1,
            block,
        }
    }

    /// Loops go back to their opening; If and Else run once.
    pub fn is_reenterable(&self) -> bool {
        !matches!(self.kind, FrameKind::If | FrameKind::Else)
    }

    /// Whether a jump to `index` stays inside this block.
    pub fn contains(&self, index: usize) -> bool {
        index > self.opening
            && match self.block {
                Some(block) => index <= block.end,
                None => true,
            }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let block = Block {
            else_index: None,
            end: 9,
        };
        let frame = Frame::new(FrameKind::While, Position::default(), 3, Some(block));
        assert!(frame.is_reenterable());
        assert!(!frame.contains(3));
        assert!(frame.contains(4));
        assert!(frame.contains(9));
        assert!(!frame.contains(10));
        let open = Frame::new(FrameKind::If, Position::default(), 3, None);
        assert!(!open.is_reenterable());
        assert!(open.contains(100));
    }
}
