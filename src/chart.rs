use serde_json::{json, Value};

use crate::models::{SentimentLabel, Tally};

/// Segment colors in fixed label order: positive, negative, neutral
pub const SEGMENT_COLORS: [&str; 3] = ["#1DA1F2", "#FF4B4B", "#FFD700"];

/// Hole fraction that turns the pie into a donut
const HOLE: f64 = 0.3;

/// Pull applied to segments with a non-zero count
const EMPHASIS_PULL: f64 = 0.1;

/// Build the plotly figure for the current tally. Pure function of the
/// tally; callers recompute it on every refresh rather than caching.
///
/// Segments with a zero count sit flush (pull 0), segments with counts
/// are pulled out for emphasis. Tooltip shows label+count, the legend
/// text shows label+percent.
pub fn pie_spec(tally: &Tally) -> Value {
    let labels: Vec<&str> = SentimentLabel::ALL.iter().map(|l| l.as_str()).collect();
    let values: Vec<u64> = SentimentLabel::ALL.iter().map(|&l| tally.count(l)).collect();
    let pulls: Vec<f64> = values
        .iter()
        .map(|&count| if count > 0 { EMPHASIS_PULL } else { 0.0 })
        .collect();

    json!({
        "data": [{
            "type": "pie",
            "labels": labels,
            "values": values,
            "hole": HOLE,
            "pull": pulls,
            "textinfo": "label+percent",
            "hoverinfo": "label+value",
            "textfont": { "size": 14 },
            "marker": {
                "colors": SEGMENT_COLORS,
                "line": { "color": "#000000", "width": 2 }
            }
        }],
        "layout": {
            "title": { "text": "Sentiment Distribution", "x": 0.5 },
            "height": 600,
            "width": 800
        }
    })
}
