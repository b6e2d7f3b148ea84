//! Concierge chat
//!
//! Scripted-response assistant for visitor questions. Each session owns
//! its transcript explicitly; replies are chosen by the first matching
//! keyword rule over the lower-cased input.

use serde::{Deserialize, Serialize};

/// Who wrote a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Speaker {
    Visitor,
    Concierge,
}

/// One transcript entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub speaker: Speaker,
    pub body: String,
}

/// A canned prompt offered alongside the input box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickReply {
    pub prompt: &'static str,
    pub reply: &'static str,
}

const GREETING: &str = "Namaste 🙏 I am your Monastery Guide. How may I help you explore Sikkim's sacred heritage today?";

const FALLBACK: &str = "I understand you're interested in learning more about Sikkim's monasteries. I can help with information about locations, festivals, virtual tours, historical archives, and cultural significance. Could you be more specific about what you'd like to explore?";

const RULES: &[(&[&str], &str)] = &[
    (
        &["rumtek"],
        "Rumtek Monastery is the largest monastery in Sikkim and the seat of the Karmapa. Built in the 16th century, it houses precious relics and offers stunning views. You can take a virtual tour, check upcoming events, or get directions. What would you like to know more about?",
    ),
    (
        &["festival", "event"],
        "Upcoming festivals include Losar (Tibetan New Year) on Feb 15 at Rumtek, Chaam Dance on Mar 8 at Pemayangtse, and Buddha Purnima on May 12 at multiple locations. Each festival has unique cultural significance and rituals. Would you like details about any specific festival?",
    ),
    (
        &["tour", "visit"],
        "Our virtual tours offer immersive 360° experiences with AI narration in English, Hindi, Nepali, and Sikkimese. You can explore prayer halls, meditation gardens, and ancient libraries. Which monastery interests you most?",
    ),
    (
        &["manuscript", "archive"],
        "Our digital archives preserve over 1,200 cultural treasures including palm leaf manuscripts, ancient murals, and ritual artifacts. You can search by monastery, century, or type. Are you researching something specific?",
    ),
    (
        &["direction", "location"],
        "I can provide directions to any monastery in Sikkim! Most are accessible by road from Gangtok. Rumtek is 16km away, Enchey is 3km, and Pemayangtse is about 110km. Which monastery would you like directions to?",
    ),
    (
        &["thank"],
        "You're most welcome! I'm here to help you explore Sikkim's rich monastery heritage. Feel free to ask about festivals, virtual tours, historical information, or anything else about our sacred sites. 🙏",
    ),
];

const QUICK_REPLIES: [QuickReply; 4] = [
    QuickReply {
        prompt: "Find monasteries near me",
        reply: "I can help you locate monasteries in Sikkim! The closest major monasteries to most visitors are Rumtek Monastery (16km from Gangtok) and Enchey Monastery (3km from Gangtok). Would you like directions to any specific monastery?",
    },
    QuickReply {
        prompt: "Upcoming festivals",
        reply: "Here are the upcoming monastery festivals: Losar Festival at Rumtek Monastery (Feb 15), Chaam Dance at Pemayangtse (Mar 8), and Buddha Purnima at multiple locations (May 12). Would you like more details about any of these events?",
    },
    QuickReply {
        prompt: "Virtual tour options",
        reply: "Our virtual tours offer immersive 360° experiences of sacred spaces! You can explore the Main Prayer Hall, Buddha Statue Chamber, Meditation Garden, Ancient Library, and Monks' Quarters. Each tour includes AI-powered narration in multiple languages. Which monastery would you like to visit virtually?",
    },
    QuickReply {
        prompt: "Digital archives",
        reply: "Our digital archives contain over 1,247 preserved items including ancient manuscripts, murals, artifacts, and cultural treasures. You can search by type, century, or monastery. Are you looking for something specific like Buddhist texts, artwork, or historical documents?",
    },
];

/// Choose the scripted reply for one visitor message.
fn scripted_reply(input: &str) -> &'static str {
    let lowered = input.to_lowercase();
    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lowered.contains(k)))
        .map(|(_, reply)| *reply)
        .unwrap_or(FALLBACK)
}

/// One visitor's conversation with the concierge.
#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
}

impl Default for ChatSession {
    fn default() -> Self {
        ChatSession::new()
    }
}

impl ChatSession {
    /// Start a session with the concierge greeting.
    pub fn new() -> Self {
        ChatSession {
            messages: vec![ChatMessage {
                speaker: Speaker::Concierge,
                body: GREETING.to_string(),
            }],
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Append a visitor message and its scripted reply; returns the
    /// reply. Blank input is ignored.
    pub fn send(&mut self, text: &str) -> Option<&ChatMessage> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        self.messages.push(ChatMessage {
            speaker: Speaker::Visitor,
            body: trimmed.to_string(),
        });
        self.messages.push(ChatMessage {
            speaker: Speaker::Concierge,
            body: scripted_reply(trimmed).to_string(),
        });
        self.messages.last()
    }

    /// Send a canned prompt; the paired canned reply is used directly.
    pub fn send_quick(&mut self, quick: &QuickReply) -> Option<&ChatMessage> {
        self.messages.push(ChatMessage {
            speaker: Speaker::Visitor,
            body: quick.prompt.to_string(),
        });
        self.messages.push(ChatMessage {
            speaker: Speaker::Concierge,
            body: quick.reply.to_string(),
        });
        self.messages.last()
    }

    pub fn quick_replies() -> &'static [QuickReply] {
        &QUICK_REPLIES
    }
}
