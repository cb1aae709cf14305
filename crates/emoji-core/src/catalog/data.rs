//! Built-in English catalog data.
//!
//! Each entry carries its English strings so the catalog and the default
//! string table are generated from the same rows.

use smol_str::format_smolstr;

use super::{EmojiRecord, FamilyId};

pub(crate) struct BuiltinEmoji {
    pub family: FamilyId,
    pub glyph: &'static str,
    pub slug: &'static str,
    pub shortcut: Option<&'static str>,
    pub description: &'static str,
    pub keywords: Option<&'static str>,
}

impl BuiltinEmoji {
    pub fn description_key(&self) -> smol_str::SmolStr {
        format_smolstr!("emoji.{}", self.slug)
    }

    pub fn keywords_key(&self) -> smol_str::SmolStr {
        format_smolstr!("emoji.{}.keywords", self.slug)
    }

    pub fn record(&self) -> EmojiRecord {
        let mut record = EmojiRecord::new(self.family, self.glyph, self.description_key());
        if let Some(shortcut) = self.shortcut {
            record = record.with_shortcut(shortcut);
        }
        if self.keywords.is_some() {
            record = record.with_keywords(self.keywords_key());
        }
        record
    }
}

const fn e(
    family: FamilyId,
    glyph: &'static str,
    slug: &'static str,
    shortcut: Option<&'static str>,
    description: &'static str,
    keywords: Option<&'static str>,
) -> BuiltinEmoji {
    BuiltinEmoji {
        family,
        glyph,
        slug,
        shortcut,
        description,
        keywords,
    }
}

use super::FamilyId::*;

#[rustfmt::skip]
pub(crate) const BUILTIN: &[BuiltinEmoji] = &[
    // People
    e(People, "😀", "grinning_face", None, "Grinning face", Some("grin happy smile face")),
    e(People, "😃", "smiley", Some(":D"), "Smiling face with open mouth", Some("smiley happy joy grin")),
    e(People, "😄", "smile", None, "Smiling face with smiling eyes", Some("smile happy joy laugh")),
    e(People, "😁", "beaming_face", None, "Beaming face with smiling eyes", Some("grin beam teeth")),
    e(People, "😆", "laughing", Some("XD"), "Laughing face", Some("laugh satisfied haha")),
    e(People, "😅", "sweat_smile", None, "Smiling face with sweat", Some("sweat nervous relief")),
    e(People, "😂", "joy", None, "Face with tears of joy", Some("joy tears laugh lol")),
    e(People, "🙂", "slight_smile", Some(":) :-)"), "Slightly smiling face", Some("smile content pleased")),
    e(People, "😉", "wink", Some(";) ;-)"), "Winking face", Some("wink flirt")),
    e(People, "😊", "blush", None, "Smiling face with smiling eyes and rosy cheeks", Some("blush shy happy")),
    e(People, "😍", "heart_eyes", None, "Smiling face with heart eyes", Some("love crush heart")),
    e(People, "😘", "kiss", Some(":*"), "Face blowing a kiss", Some("kiss love")),
    e(People, "😛", "tongue", Some(":P :p"), "Face with tongue", Some("tongue playful silly")),
    e(People, "😎", "sunglasses", Some("8)"), "Smiling face with sunglasses", Some("cool sunglasses")),
    e(People, "😐", "neutral", Some(":|"), "Neutral face", Some("neutral meh")),
    e(People, "😕", "confused", Some(":/"), "Confused face", Some("confused unsure")),
    e(People, "🙁", "frown", Some(":( :-("), "Slightly frowning face", Some("sad frown unhappy")),
    e(People, "😢", "cry", Some(":'("), "Crying face", Some("cry sad tear")),
    e(People, "😮", "open_mouth", Some(":o :O"), "Face with open mouth", Some("surprise wow shock")),
    e(People, "😡", "rage", None, "Pouting face", Some("angry rage mad")),
    e(People, "😴", "sleeping", None, "Sleeping face", Some("sleep tired zzz")),
    e(People, "🤔", "thinking", None, "Thinking face", Some("think hmm ponder")),
    e(People, "👍", "thumbs_up", Some("(y)"), "Thumbs up", Some("like yes approve ok")),
    e(People, "👎", "thumbs_down", Some("(n)"), "Thumbs down", Some("dislike no")),
    e(People, "👏", "clap", None, "Clapping hands", Some("clap applause bravo")),
    e(People, "🙏", "folded_hands", None, "Folded hands", Some("pray please thanks")),
    e(People, "👋", "wave", None, "Waving hand", Some("wave hello bye")),
    e(People, "💪", "muscle", None, "Flexed biceps", Some("strong muscle flex")),
    e(People, "👶", "baby", None, "Baby", Some("baby child")),
    e(People, "🧑‍💻", "technologist", None, "Technologist", None),
    // Nature
    e(Nature, "🐶", "dog", None, "Dog face", Some("dog puppy pet")),
    e(Nature, "🐱", "cat", None, "Cat face", Some("cat kitten pet")),
    e(Nature, "🐭", "mouse", None, "Mouse face", Some("mouse rodent")),
    e(Nature, "🐰", "rabbit", None, "Rabbit face", Some("rabbit bunny")),
    e(Nature, "🦊", "fox", None, "Fox", Some("fox")),
    e(Nature, "🐻", "bear", None, "Bear", Some("bear")),
    e(Nature, "🐼", "panda", None, "Panda", Some("panda bear")),
    e(Nature, "🐸", "frog", None, "Frog", Some("frog toad")),
    e(Nature, "🐵", "monkey", None, "Monkey face", Some("monkey")),
    e(Nature, "🐧", "penguin", None, "Penguin", Some("penguin bird")),
    e(Nature, "🐢", "turtle", None, "Turtle", Some("turtle slow")),
    e(Nature, "🐍", "snake", None, "Snake", Some("snake serpent")),
    e(Nature, "🌸", "cherry_blossom", None, "Cherry blossom", Some("flower blossom spring")),
    e(Nature, "🌻", "sunflower", None, "Sunflower", Some("flower sun summer")),
    e(Nature, "🌲", "evergreen", None, "Evergreen tree", Some("tree pine forest")),
    e(Nature, "🍀", "clover", None, "Four leaf clover", Some("luck clover")),
    e(Nature, "🌞", "sun_with_face", None, "Sun with face", Some("sun sunny")),
    e(Nature, "🌙", "crescent_moon", None, "Crescent moon", Some("moon night")),
    e(Nature, "🌈", "rainbow", None, "Rainbow", Some("rainbow weather")),
    e(Nature, "❄️", "snowflake", None, "Snowflake", Some("snow cold winter")),
    e(Nature, "🌵", "cactus", None, "Cactus", None),
    // Activities
    e(Activities, "⚽", "soccer", None, "Soccer ball", Some("soccer football ball sport")),
    e(Activities, "🏀", "basketball", None, "Basketball", Some("basketball ball sport")),
    e(Activities, "🏈", "american_football", None, "American football", Some("football ball sport")),
    e(Activities, "⚾", "baseball", None, "Baseball", Some("baseball ball sport")),
    e(Activities, "🎾", "tennis", None, "Tennis", Some("tennis ball sport")),
    e(Activities, "🏓", "ping_pong", None, "Ping pong", Some("ping pong table tennis")),
    e(Activities, "🎮", "video_game", None, "Video game", Some("game controller play")),
    e(Activities, "🎲", "game_die", None, "Game die", Some("dice game")),
    e(Activities, "🎯", "direct_hit", None, "Direct hit", Some("target bullseye dart")),
    e(Activities, "🎸", "guitar", None, "Guitar", Some("guitar music rock")),
    e(Activities, "🎨", "art", None, "Artist palette", Some("art paint palette")),
    e(Activities, "🎉", "tada", None, "Party popper", Some("party celebrate congratulations tada")),
    e(Activities, "🎂", "birthday", None, "Birthday cake", Some("birthday cake party")),
    e(Activities, "🏆", "trophy", None, "Trophy", Some("trophy win award")),
    // Places
    e(Places, "🏠", "house", None, "House", Some("house home")),
    e(Places, "🏢", "office", None, "Office building", Some("office work building")),
    e(Places, "🏥", "hospital", None, "Hospital", Some("hospital doctor")),
    e(Places, "🏫", "school", None, "School", Some("school education")),
    e(Places, "🏰", "castle", None, "Castle", Some("castle")),
    e(Places, "⛰️", "mountain", None, "Mountain", Some("mountain hike")),
    e(Places, "🏖️", "beach", None, "Beach with umbrella", Some("beach vacation summer")),
    e(Places, "🚗", "car", None, "Automobile", Some("car drive")),
    e(Places, "🚕", "taxi", None, "Taxi", Some("taxi cab")),
    e(Places, "🚌", "bus", None, "Bus", Some("bus transit")),
    e(Places, "🚲", "bicycle", None, "Bicycle", Some("bike bicycle")),
    e(Places, "✈️", "airplane", None, "Airplane", Some("airplane flight travel")),
    e(Places, "🚀", "rocket", None, "Rocket", Some("rocket launch space ship")),
    e(Places, "🌍", "earth", None, "Globe showing Europe-Africa", Some("earth globe world")),
    // Objects
    e(Objects, "📱", "phone", None, "Mobile phone", Some("phone mobile cell")),
    e(Objects, "💻", "laptop", None, "Laptop", Some("laptop computer")),
    e(Objects, "⌨️", "keyboard", None, "Keyboard", Some("keyboard typing computer")),
    e(Objects, "📷", "camera", None, "Camera", Some("camera photo")),
    e(Objects, "💡", "light_bulb", None, "Light bulb", Some("idea light bulb")),
    e(Objects, "📚", "books", None, "Books", Some("books library read")),
    e(Objects, "✏️", "pencil", None, "Pencil", Some("pencil write")),
    e(Objects, "📎", "paperclip", None, "Paperclip", Some("paperclip attach")),
    e(Objects, "🔑", "key", None, "Key", Some("key lock password")),
    e(Objects, "🔒", "lock", None, "Locked", Some("lock secure private")),
    e(Objects, "🔨", "hammer", None, "Hammer", Some("hammer tool")),
    e(Objects, "⏰", "alarm_clock", None, "Alarm clock", Some("alarm clock time")),
    e(Objects, "📅", "calendar", None, "Calendar", Some("calendar date schedule")),
    e(Objects, "☕", "coffee", None, "Hot beverage", Some("coffee tea")),
    e(Objects, "🍕", "pizza", None, "Pizza", Some("pizza food")),
    e(Objects, "🎁", "gift", None, "Wrapped gift", Some("gift present birthday")),
    // Symbols
    e(Symbols, "❤️", "heart", Some("<3"), "Red heart", Some("love heart")),
    e(Symbols, "💔", "broken_heart", Some("</3"), "Broken heart", Some("heartbreak sad")),
    e(Symbols, "💯", "hundred", None, "Hundred points", Some("hundred perfect score")),
    e(Symbols, "✅", "check_mark", None, "Check mark button", Some("check done yes complete")),
    e(Symbols, "❌", "cross_mark", None, "Cross mark", Some("cross no wrong")),
    e(Symbols, "⚠️", "warning", None, "Warning", Some("warning caution")),
    e(Symbols, "❓", "question", None, "Question mark", Some("question ask")),
    e(Symbols, "❗", "exclamation", None, "Exclamation mark", Some("exclamation important")),
    e(Symbols, "♻️", "recycle", None, "Recycling symbol", Some("recycle green")),
    e(Symbols, "✨", "sparkles", None, "Sparkles", Some("sparkles shiny new")),
    e(Symbols, "💤", "zzz", None, "Zzz", Some("sleep zzz")),
    e(Symbols, "🔥", "fire", None, "Fire", Some("fire hot lit")),
];
