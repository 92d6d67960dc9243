//! Static lesson content keyed by learning level.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{LearningContent, LearningLevel};

/// Sections of a personalized lesson a student can mark as done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonSection {
    Explanation,
    Practice,
    Tips,
    Quiz,
}

/// Number of sections in every lesson.
pub const LESSON_SECTIONS: usize = 4;

impl fmt::Display for LessonSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LessonSection::Explanation => write!(f, "explanation"),
            LessonSection::Practice => write!(f, "practice"),
            LessonSection::Tips => write!(f, "tips"),
            LessonSection::Quiz => write!(f, "quiz"),
        }
    }
}

static BEGINNER: LearningContent = LearningContent {
    level: LearningLevel::Beginner,
    title: "Computer Networks Fundamentals",
    explanation: "\
Based on your diagnostic quiz, we'll start with the fundamentals of Computer Networks.

What is a Computer Network?
A computer network is a collection of interconnected devices (computers, printers, \
servers) that can share data and resources with each other.

Types of Networks:
- LAN (Local Area Network): covers a small geographic area like a home or office
- WAN (Wide Area Network): covers large areas, like the Internet
- MAN (Metropolitan Area Network): spans a city or campus

Basic Network Devices:
- Router: connects different networks together
- Switch: connects devices within the same network
- Hub: basic device that broadcasts data to all ports

Key Concepts to Master:
1. Network types (LAN, WAN, MAN)
2. Basic devices (Router, Switch, Hub)
3. IP addresses and their purpose
4. What protocols do (HTTP, FTP, SMTP)",
    practice_questions: &[
        "Explain the difference between a router and a switch.",
        "What type of network would you use to connect computers in your home?",
        "Why do computers need IP addresses?",
        "Draw a simple star topology network.",
    ],
    tips: &[
        "Start by understanding what each network device does",
        "Create flashcards for common networking acronyms",
        "Practice identifying network components in your daily life",
        "Remember: Routers connect networks, Switches connect devices",
    ],
};

static INTERMEDIATE: LearningContent = LearningContent {
    level: LearningLevel::Intermediate,
    title: "Building Network Knowledge",
    explanation: "\
You have a solid foundation. Let's build on that.

The OSI Model (7 Layers):
  7 Application   user interface (HTTP, FTP)
  6 Presentation  data formatting
  5 Session       connection management
  4 Transport     reliable delivery (TCP/UDP)
  3 Network       routing (IP addresses)
  2 Data Link     MAC addresses, switches
  1 Physical      cables, signals

Important Protocols:
- TCP: reliable, connection-oriented (like a phone call)
- UDP: fast, connectionless (like sending mail)
- HTTP/HTTPS: web communication
- DNS: domain name to IP translation

Network Security Basics:
  Firewall   -> filters traffic
  Encryption -> protects data
  VPN        -> secure remote access",
    practice_questions: &[
        "List all 7 layers of the OSI model and their main functions.",
        "Explain the difference between TCP and UDP with examples.",
        "What happens when you type a website URL in your browser?",
        "How does a firewall protect a network?",
    ],
    tips: &[
        "Memorize OSI layers: Please Do Not Throw Sausage Pizza Away",
        "Compare TCP vs UDP and know when to use each",
        "Use command prompt tools like ping and traceroute",
        "Study how DNS resolution works step by step",
    ],
};

static ADVANCED: LearningContent = LearningContent {
    level: LearningLevel::Advanced,
    title: "Mastering Network Concepts",
    explanation: "\
You're ready for advanced networking challenges.

Subnetting & IP Addressing:
  IP Address:  192.168.1.100
  Subnet Mask: 255.255.255.0
  Network:     192.168.1.0
  Broadcast:   192.168.1.255

Advanced Protocols:
- BGP: Border Gateway Protocol (Internet backbone)
- OSPF: Open Shortest Path First (routing)
- SNMP: network management
- SSL/TLS: secure communications

Network Architecture Concepts:
- Three-tier architecture: Access, Distribution, Core
- Software-Defined Networking (SDN)
- Network virtualization

Security Deep Dive:
  IDS/IPS -> intrusion detection/prevention
  DMZ     -> demilitarized zone
  ACL     -> access control lists
  NAT     -> network address translation",
    practice_questions: &[
        "Calculate the number of usable hosts in a /24 subnet.",
        "Design a network topology for a small business with 3 departments.",
        "Explain how NAT helps with IPv4 address exhaustion.",
        "Compare and contrast IDS and IPS systems.",
    ],
    tips: &[
        "Practice subnetting calculations regularly",
        "Study for networking certifications (CCNA, Network+)",
        "Set up a home lab to practice configurations",
        "Understand the difference between Layer 2 and Layer 3",
    ],
};

/// Lesson content for a learning level.
pub fn learning_content(level: LearningLevel) -> &'static LearningContent {
    match level {
        LearningLevel::Beginner => &BEGINNER,
        LearningLevel::Intermediate => &INTERMEDIATE,
        LearningLevel::Advanced => &ADVANCED,
    }
}
