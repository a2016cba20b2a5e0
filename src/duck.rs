use std::fmt;

const SPRITES: [&str; 1] = ["🦆"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Duck {
    pub name: String,
    pub position: u32,
    pub animation_frame: u32,
}

impl Duck {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: 0,
            animation_frame: 0,
        }
    }

    pub fn sprite(&self) -> &'static str {
        SPRITES[self.animation_frame as usize % SPRITES.len()]
    }
}

impl fmt::Display for Duck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
