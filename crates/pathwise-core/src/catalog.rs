//! The built-in Computer Networks question bank.

use crate::model::LearningLevel::{self, Advanced, Beginner, Intermediate};
use crate::model::QuizQuestion;

/// Questions drawn per diagnostic quiz unless configured otherwise.
pub const DEFAULT_QUIZ_SIZE: usize = 10;

type Entry = (u32, &'static str, [&'static str; 4], usize, LearningLevel);

const NETWORKS: [Entry; 20] = [
    (
        1,
        "What is a computer network?",
        ["A single computer", "A group of connected computers", "A software program", "A database"],
        1,
        Beginner,
    ),
    (
        2,
        "Which device is used to connect multiple networks together?",
        ["Switch", "Hub", "Router", "Repeater"],
        2,
        Beginner,
    ),
    (
        3,
        "What does LAN stand for?",
        ["Large Area Network", "Local Area Network", "Logical Area Network", "Limited Area Network"],
        1,
        Beginner,
    ),
    (
        4,
        "Which protocol is used to send emails?",
        ["FTP", "SMTP", "HTTP", "TCP"],
        1,
        Intermediate,
    ),
    (
        5,
        "What is the main function of the OSI model?",
        [
            "Hardware manufacturing",
            "Network communication standardization",
            "Data storage",
            "Software testing",
        ],
        1,
        Intermediate,
    ),
    (
        6,
        "How many layers are there in the OSI model?",
        ["5", "6", "7", "8"],
        2,
        Beginner,
    ),
    (
        7,
        "Which layer of the OSI model is responsible for routing?",
        ["Transport", "Network", "Data Link", "Physical"],
        1,
        Intermediate,
    ),
    (
        8,
        "What is an IP address?",
        ["A physical address", "A logical address", "A MAC address", "A port number"],
        1,
        Beginner,
    ),
    (
        9,
        "Which protocol is used for secure web communication?",
        ["HTTP", "FTP", "HTTPS", "SMTP"],
        2,
        Intermediate,
    ),
    (
        10,
        "What does DNS do?",
        [
            "Encrypts data",
            "Translates domain names to IP addresses",
            "Sends emails",
            "Routes packets",
        ],
        1,
        Intermediate,
    ),
    (
        11,
        "Which topology connects all devices to a central hub?",
        ["Bus", "Ring", "Star", "Mesh"],
        2,
        Beginner,
    ),
    (
        12,
        "What is the full form of TCP?",
        [
            "Transmission Control Protocol",
            "Transfer Communication Protocol",
            "Technical Control Protocol",
            "Transport Connection Protocol",
        ],
        0,
        Beginner,
    ),
    (
        13,
        "Which device works at the Data Link layer?",
        ["Router", "Switch", "Modem", "Gateway"],
        1,
        Advanced,
    ),
    (
        14,
        "What is packet switching?",
        [
            "Circuit-based communication",
            "Data divided into packets",
            "Direct data transfer",
            "Wireless transmission",
        ],
        1,
        Intermediate,
    ),
    (
        15,
        "What is the function of a firewall?",
        ["Increase speed", "Protect network security", "Store data", "Convert signals"],
        1,
        Beginner,
    ),
    (
        16,
        "Which address is used for physical identification of a device?",
        ["IP address", "MAC address", "Port number", "URL"],
        1,
        Intermediate,
    ),
    (
        17,
        "What type of network is the Internet?",
        ["LAN", "MAN", "WAN", "PAN"],
        2,
        Beginner,
    ),
    (
        18,
        "Which protocol is used for file transfer?",
        ["FTP", "SMTP", "POP3", "SNMP"],
        0,
        Intermediate,
    ),
    (
        19,
        "What does bandwidth refer to?",
        ["Network security", "Data transfer capacity", "Cable length", "Signal type"],
        1,
        Advanced,
    ),
    (
        20,
        "Which layer ensures error-free data transmission?",
        ["Application", "Transport", "Network", "Session"],
        1,
        Advanced,
    ),
];

/// The 20-question Computer Networks catalog.
pub fn builtin() -> Vec<QuizQuestion> {
    NETWORKS
        .iter()
        .map(|(id, question, options, correct_answer, difficulty)| QuizQuestion {
            id: *id,
            question: (*question).to_string(),
            options: options.iter().map(|o| (*o).to_string()).collect(),
            correct_answer: *correct_answer,
            difficulty: *difficulty,
        })
        .collect()
}
