//! Emotion categories and the messages shown for them.

use std::fmt;
use std::str::FromStr;

/// Emotion categories accepted by the server's record form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emotion {
    Joy,
    Anger,
    Sadness,
    Calm,
    Excitement,
    Anxiety,
    Love,
}

/// Accent color used when an emotion key is not recognized
pub const FALLBACK_COLOR: &str = "#6C63FF";

/// Feedback shown when the selected value is not a known emotion
pub const FALLBACK_FEEDBACK: &[&str] = &["素敵な感情を記録していただき、ありがとうございます"];

/// Messages shown once per home page visit
pub const MOTIVATIONAL_MESSAGES: &[&str] = &[
    "今日も一日お疲れ様でした ✨",
    "感情を記録することで、心の健康を保てます",
    "小さな変化も大切な成長です",
    "あなたの感情は美しい色彩を描いています",
    "毎日の記録が未来のあなたを支えます",
];

impl Emotion {
    pub const ALL: [Emotion; 7] = [
        Emotion::Joy,
        Emotion::Anger,
        Emotion::Sadness,
        Emotion::Calm,
        Emotion::Excitement,
        Emotion::Anxiety,
        Emotion::Love,
    ];

    /// Form value used by the server
    pub fn key(self) -> &'static str {
        match self {
            Emotion::Joy => "joy",
            Emotion::Anger => "anger",
            Emotion::Sadness => "sadness",
            Emotion::Calm => "calm",
            Emotion::Excitement => "excitement",
            Emotion::Anxiety => "anxiety",
            Emotion::Love => "love",
        }
    }

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            Emotion::Joy => "喜び",
            Emotion::Anger => "怒り",
            Emotion::Sadness => "悲しみ",
            Emotion::Calm => "穏やか",
            Emotion::Excitement => "興奮",
            Emotion::Anxiety => "不安",
            Emotion::Love => "愛情",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Emotion::Joy => "😊",
            Emotion::Anger => "😠",
            Emotion::Sadness => "😢",
            Emotion::Calm => "😌",
            Emotion::Excitement => "🤩",
            Emotion::Anxiety => "😰",
            Emotion::Love => "😍",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Emotion::Joy => "#FFD700",
            Emotion::Anger => "#FF4444",
            Emotion::Sadness => "#4A90E2",
            Emotion::Calm => "#90EE90",
            Emotion::Excitement => "#FF6B35",
            Emotion::Anxiety => "#9B59B6",
            Emotion::Love => "#FF1744",
        }
    }

    /// Encouragement shown after this emotion is picked
    pub fn feedback(self) -> &'static [&'static str] {
        match self {
            Emotion::Joy => &["素晴らしい一日ですね！ ✨", "その笑顔を大切に 😊"],
            Emotion::Anger => &[
                "感情を記録することで心が軽くなります",
                "深呼吸をして、穏やかな気持ちを取り戻しましょう",
            ],
            Emotion::Sadness => &[
                "辛い時もありますが、明日はきっと良い日になります",
                "あなたの感情は大切です",
            ],
            Emotion::Calm => &["穏やかな心、とても素敵です", "平和な時間を大切にしてください"],
            Emotion::Excitement => &["その興奮を記録に残しましょう！", "エネルギーに満ちた一日ですね"],
            Emotion::Anxiety => &["不安な気持ちも大切な感情です", "ゆっくり深呼吸をしてみてください"],
            Emotion::Love => &["愛に満ちた心、美しいですね ❤️", "その温かい気持ちを大切に"],
        }
    }
}

impl FromStr for Emotion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Emotion::ALL
            .into_iter()
            .find(|e| e.key() == s)
            .ok_or_else(|| format!("Unknown emotion: {}", s))
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon(), self.name())
    }
}

/// Feedback messages for a raw form value, falling back for unknown keys
pub fn feedback_for(value: &str) -> &'static [&'static str] {
    value
        .parse::<Emotion>()
        .map(Emotion::feedback)
        .unwrap_or(FALLBACK_FEEDBACK)
}

/// Accent color for a raw form value
pub fn color_for(value: &str) -> &'static str {
    value
        .parse::<Emotion>()
        .map(Emotion::color)
        .unwrap_or(FALLBACK_COLOR)
}

/// Pick one message using a roll in `[0, 1)`.
///
/// Rolls outside the range are clamped to the first/last message.
pub fn pick<'a>(messages: &[&'a str], roll: f64) -> &'a str {
    if messages.is_empty() {
        return "";
    }
    let roll = if roll.is_nan() { 0.0 } else { roll };
    let idx = (roll * messages.len() as f64).floor().max(0.0) as usize;
    messages[idx.min(messages.len() - 1)]
}

/// Pick one message using the browser's RNG
pub fn pick_random<'a>(messages: &[&'a str]) -> &'a str {
    pick(messages, js_sys::Math::random())
}
