use super::entry::{CatalogEntry, Education, Experience};

pub(super) fn entries() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new(
            "Data Scientist",
            "python, machine learning, statistics, data visualization",
            Education::Bachelor,
            "data, analytics, research",
            Experience::Mid,
            "Analyzes data to extract insights and build predictive models.",
        ),
        CatalogEntry::new(
            "Software Engineer",
            "java, c++, algorithms, problem solving",
            Education::Bachelor,
            "coding, development, problem solving",
            Experience::Junior,
            "Designs and develops software applications and systems.",
        ),
        CatalogEntry::new(
            "Graphic Designer",
            "photoshop, creativity, adobe illustrator, visual design",
            Education::Associate,
            "art, creativity, media",
            Experience::Entry,
            "Creates visual concepts to communicate ideas.",
        ),
        CatalogEntry::new(
            "Project Manager",
            "leadership, communication, scheduling, budgeting",
            Education::Bachelor,
            "management, organization, planning",
            Experience::Senior,
            "Oversees projects to ensure timely delivery within budget.",
        ),
        CatalogEntry::new(
            "Marketing Specialist",
            "seo, content creation, social media, communication",
            Education::Bachelor,
            "marketing, branding, communication",
            Experience::Mid,
            "Develops strategies to promote products and brands.",
        ),
        CatalogEntry::new(
            "Cybersecurity Analyst",
            "network security, python, risk assessment, cryptography",
            Education::Bachelor,
            "security, technology, risk management",
            Experience::Mid,
            "Protects an organization's computer systems and networks.",
        ),
        CatalogEntry::new(
            "Mechanical Engineer",
            "cad, thermodynamics, mechanics, problem solving",
            Education::Bachelor,
            "engineering, mechanics, design",
            Experience::Mid,
            "Designs and tests mechanical devices and systems.",
        ),
        CatalogEntry::new(
            "Financial Analyst",
            "excel, finance, accounting, data analysis",
            Education::Bachelor,
            "finance, economics, data",
            Experience::Junior,
            "Provides investment and financial recommendations.",
        ),
        CatalogEntry::new(
            "Teacher",
            "communication, patience, subject knowledge, mentoring",
            Education::Bachelor,
            "teaching, education, helping others",
            Experience::Mid,
            "Educates and supports students in learning.",
        ),
        CatalogEntry::new(
            "UX Designer",
            "wireframing, user research, creativity, prototyping",
            Education::Bachelor,
            "design, user experience, psychology",
            Experience::Mid,
            "Improves user satisfaction with products by enhancing usability.",
        ),
    ]
}
