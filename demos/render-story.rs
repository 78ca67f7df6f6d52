use slide_gen::{
    assemble_story, resolve_caption, RenderConfig, RuleSplitter, SentenceSplitter, StoryRecord,
    StoryRenderer,
};

fn main() {
    let font_path = std::env::args()
        .nth(1)
        .expect("usage: render-story <font.ttf>");

    // paint an orange gradient base so the demo ships no image asset
    let out_dir = std::path::Path::new("demo-out");
    std::fs::create_dir_all(out_dir).expect("can create output directory");
    let background = out_dir.join("background.png");
    let mut img = image::RgbImage::new(1080, 1080);
    for (_, y, pixel) in img.enumerate_pixels_mut() {
        let t = y as f32 / 1080.0;
        *pixel = image::Rgb([
            (244.0 - 64.0 * t) as u8,
            (132.0 - 70.0 * t) as u8,
            (30.0 + 10.0 * t) as u8,
        ]);
    }
    img.save(&background).expect("can save background");

    let config = RenderConfig::new(&background, &font_path);

    let record = StoryRecord {
        location: "The United States".into(),
        narrative: lipsum::lipsum(120),
        title: Some("Breaking Barriers".into()),
        caption: None,
    };

    let sentences = RuleSplitter.split_into_sentences(&record.narrative);
    let caption = resolve_caption(&record, None, &config.cta_text);
    let story = assemble_story(&config, &record, &sentences, caption);

    let renderer = StoryRenderer::new(&config).expect("can load render assets");
    let paths = renderer
        .render_story(&story, &out_dir.join("story_1"))
        .expect("can render story");

    println!("caption:\n{}\n", story.caption);
    for path in paths {
        println!("rendered {}", path.display());
    }
}
