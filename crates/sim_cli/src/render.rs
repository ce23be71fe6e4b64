use sim_core::{EdgeColor, GraphState, Triangle, VERTICES};

fn symbol(c: EdgeColor) -> char {
    match c {
        EdgeColor::Uncolored => '.',
        EdgeColor::Solid => 'S',
        EdgeColor::Dashed => 'D',
    }
}

/// Text rendering of the coloring matrix.
///
/// ```text
///   | 0 1 2 3 4 5
/// --+------------
/// 0 | \ S . . . .
/// 1 | S \ . . . D
/// ```
pub fn render(state: &GraphState) -> String {
    let mut out = String::from("  |");
    for v in 0..VERTICES {
        out.push_str(&format!(" {v}"));
    }
    out.push('\n');
    out.push_str("--+");
    out.push_str(&"-".repeat(2 * VERTICES));
    out.push('\n');

    for (a, row) in state.rows().iter().enumerate() {
        out.push_str(&format!("{a} |"));
        for (b, &cell) in row.iter().enumerate() {
            out.push(' ');
            out.push(if a == b { '\\' } else { symbol(cell) });
        }
        out.push('\n');
    }
    out
}

pub fn describe_triangle(t: &Triangle) -> String {
    let [i, j, k] = t.vertices;
    format!("{} triangle found at {i} {j} {k}", t.color)
}
