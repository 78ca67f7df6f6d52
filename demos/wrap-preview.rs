use slide_gen::layout::{layout_block, Alignment, MarginSpec};
use slide_gen::{canvas, Font, Px};

fn main() {
    let font_path = std::env::args()
        .nth(1)
        .expect("usage: wrap-preview <font.ttf>");
    let font = Font::load_from_disk(&font_path).expect("can load font");

    let content_box = MarginSpec::Percent(10.0)
        .content_box(canvas::SQUARE)
        .expect("margins fit");

    let text = lipsum::lipsum(40);
    let layout = layout_block(&text, &font, 30.0, content_box, Px(10), Alignment::Center);

    println!(
        "{} lines, block height {}px:",
        layout.lines.len(),
        layout.block_height
    );
    for line in &layout.lines {
        println!("  ({:>4}, {:>4}) {}", line.x, line.y, line.text);
    }
}
