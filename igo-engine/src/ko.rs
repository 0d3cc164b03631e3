use serde::{Deserialize, Serialize};

use crate::Point;
use crate::stone::Stone;

/// Simple ko: the point the next move may not play on, and the color that is to make that move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ko {
    pub pos: Point,
    pub illegal: Stone,
}
