use crate::Point;
use crate::goban::BoardSize;

/// The nine star points of a board: corners, side midpoints and tengen.
///
/// Corner and side points sit on the third line from the edge on 9x9 and on the
/// fourth line on larger boards.
pub fn hoshi_points(size: BoardSize) -> Vec<Point> {
    let n = size.lines();
    let off = if n > 9 { 3 } else { 2 };
    let far = n - 1 - off;
    let mid = n / 2;

    let lines = [off, mid, far];
    lines
        .iter()
        .flat_map(|&y| lines.iter().map(move |&x| (x, y)))
        .collect()
}

pub fn is_hoshi(size: BoardSize, point: Point) -> bool {
    hoshi_points(size).contains(&point)
}
