use crate::Dataset;

/// Render the town grid with one mark per deposit.
///
/// Each resource kind is drawn as a letter (`a` for kind 0, `b` for kind 1
/// and so on, wrapping after `z`); a cell holding deposits of several kinds
/// is drawn as `*`, an empty cell as `.`. Deposits outside the town are
/// skipped.
pub fn visualize_town(dataset: &Dataset) -> String {
    let width = dataset.town.width.max(0) as usize;
    let height = dataset.town.height.max(0) as usize;

    let mut cells = vec![vec!['.'; width]; height];
    for (kind_idx, kind) in dataset.kinds.iter().enumerate() {
        let mark = (b'a' + (kind_idx % 26) as u8) as char;
        for &p in &kind.deposits {
            if !dataset.town.contains(p) {
                continue;
            }
            let cell = &mut cells[p.y as usize][p.x as usize];
            *cell = if *cell == '.' || *cell == mark { mark } else { '*' };
        }
    }

    // Draw the top of the box
    let mut result = String::from("╭");
    for _ in 0..width {
        result += "──";
    }
    result += "╮\n";
    for row in &cells {
        result.push('│');
        for &cell in row {
            result.push(cell);
            result.push(' ');
        }
        result += "│\n";
    }
    // Draw the bottom of the box
    result.push('╰');
    for _ in 0..width {
        result += "──";
    }
    result.push('╯');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Point, ResourceKind, Town};

    #[test]
    fn marks_each_kind_with_its_letter() {
        let kind = |deposits: &[(i32, i32)]| ResourceKind {
            deposits: deposits.iter().map(|&(x, y)| Point { x, y }).collect(),
        };
        let dataset = Dataset {
            town: Town {
                height: 2,
                width: 3,
            },
            kinds: vec![kind(&[(0, 0), (2, 1)]), kind(&[(0, 0), (1, 0)])],
        };
        let expected = "╭──────╮\n\
                        │* b . │\n\
                        │. . a │\n\
                        ╰──────╯";
        assert_eq!(visualize_town(&dataset), expected);
    }
}
