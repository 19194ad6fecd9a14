use std::collections::HashSet;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::*;
use gibbslda::{Lda, LdaConfig};

//
// Short headlines, ten per category.
//
const DOCUMENTS: &[&str] = &[
    // Sports
    "cricket match was exciting and players performed well",
    "football team won the championship after a tough game",
    "the athlete trained hard to win the marathon",
    "basketball match was intense with last minute scores",
    "fans celebrated the victory of their favorite team",
    "the tournament showcased emerging young players",
    "team strategy led to a remarkable win",
    "player broke the record in the cricket league",
    "stadium was full during the football finals",
    "athletes prepared diligently for the upcoming games",
    // Politics
    "government announced new policy reforms",
    "election results surprised many citizens",
    "parliament passed a significant bill yesterday",
    "political leaders debated on the new legislation",
    "voters expressed their opinions during the elections",
    "the campaign strategies were discussed extensively",
    "government plans to improve infrastructure",
    "politicians addressed the public concerns",
    "policy changes will affect healthcare and education",
    "the president met with international leaders",
    // Technology
    "new AI technology is transforming industries rapidly",
    "software development trends show increased adoption of cloud computing",
    "tech companies innovate continuously to stay competitive",
    "machine learning models are becoming more accurate",
    "programmers develop mobile applications for users worldwide",
    "artificial intelligence helps automate routine tasks",
    "emerging technologies drive digital transformation",
    "startups focus on blockchain and fintech innovations",
    "developers contribute to open-source software projects",
    "robotics and AI are revolutionizing manufacturing",
    // Health
    "healthcare system requires more investment for quality service",
    "doctors recommend regular exercise for better health",
    "medical research advances treatments for chronic diseases",
    "patients benefit from early diagnosis and care",
    "nutrition and diet impact overall wellbeing",
    "mental health awareness is increasing globally",
    "vaccination programs reduce the spread of diseases",
    "fitness activities improve physical and mental health",
    "health professionals are improving patient care",
    "new medical devices assist in surgeries and treatment",
    // Environment
    "climate change affects global weather patterns",
    "deforestation leads to loss of biodiversity",
    "renewable energy sources reduce pollution and carbon emissions",
    "conservation efforts help protect endangered species",
    "environmental policies aim to reduce carbon footprint",
    "recycling and waste management are important for sustainability",
    "oceans and rivers face threats from plastic pollution",
    "renewable energy projects are being implemented worldwide",
    "air quality improves with reduced industrial emissions",
    "green initiatives promote eco-friendly practices",
];

const LABELS: [&str; 5] = ["Sports", "Politics", "Technology", "Health", "Environment"];

fn default_stopwords() -> HashSet<&'static str> {
    [
        "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "in", "is", "it",
        "of", "on", "or", "that", "the", "to", "was", "were", "will", "with", "their", "more",
    ]
    .into_iter()
    .collect()
}

fn tokenize(text: &str, stop: &HashSet<&str>) -> Vec<String> {
    text.to_lowercase()
        .chars()
        .map(|c| if c.is_alphabetic() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .filter(|tok| tok.len() >= 2 && !stop.contains(*tok))
        .map(|tok| tok.to_string())
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let stop = default_stopwords();
    let docs: Vec<Vec<String>> = DOCUMENTS.iter().map(|d| tokenize(d, &stop)).collect();

    let config = LdaConfig::new(LABELS.len())
        .alpha(0.1)
        .beta(0.01)
        .iterations(800)
        .topic_labels(LABELS)
        .seed(42);
    let mut lda = Lda::new(&docs, config)?;
    println!(
        "Training LDA (K={}, iters={})...",
        lda.num_topics(),
        lda.config().iterations
    );
    lda.run()?;

    let mut topics_table = Table::new();
    topics_table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Topic").fg(Color::Red),
            Cell::new("Words").fg(Color::White),
            Cell::new("Coherence").fg(Color::White),
        ]);
    for topic in lda.topics(6) {
        let words = topic
            .top_words
            .iter()
            .map(|(w, p)| format!("{w}[{p:.3}]"))
            .collect::<Vec<_>>()
            .join(" ");
        let coherence = lda.topic_coherence(topic.index, 6)?;
        topics_table.add_row(vec![
            Cell::new(&topic.label),
            Cell::new(words),
            Cell::new(format!("{coherence:.3}")),
        ]);
    }
    println!("{topics_table}");

    let mut docs_table = Table::new();
    docs_table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Document").fg(Color::Red),
            Cell::new("Label").fg(Color::White),
            Cell::new("Distribution").fg(Color::White),
        ]);
    for (d, text) in DOCUMENTS.iter().enumerate() {
        let dist = lda
            .document_topic_distribution(d)?
            .iter()
            .map(|p| format!("{p:.2}"))
            .collect::<Vec<_>>()
            .join(" ");
        docs_table.add_row(vec![
            Cell::new(text),
            Cell::new(lda.document_label(d)?),
            Cell::new(dist),
        ]);
    }
    println!("{docs_table}");

    println!("Perplexity: {:.2}", lda.perplexity()?);
    Ok(())
}
