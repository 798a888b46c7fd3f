// Static content rendered by the home page sections.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionId {
    Home,
    About,
    Skills,
    Timeline,
    Projects,
    Testimonials,
    Contact,
}

impl SectionId {
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Timeline => "timeline",
            SectionId::Projects => "projects",
            SectionId::Testimonials => "testimonials",
            SectionId::Contact => "contact",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency in percent.
    pub level: u8,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub image_alt: &'static str,
    pub tags: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Milestone {
    pub year: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
    pub image: &'static str,
}

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "I'm a passionate Full Stack Developer with 5+ years of experience building modern web applications. I specialize in React, Node.js, and modern JavaScript frameworks.",
    "My approach combines technical expertise with creative problem-solving to deliver exceptional user experiences and scalable solutions.",
];

pub const EXPERIENCE: &[&str] = &[
    "Senior Developer at Tech Corp (2020-Present)",
    "Full Stack Developer at Web Solutions (2018-2020)",
];

pub const EDUCATION: &[&str] = &[
    "MS in Computer Science - Tech University",
    "BS in Software Engineering - Code College",
];

pub const SKILLS: &[Skill] = &[
    Skill { name: "React", level: 90 },
    Skill { name: "JavaScript", level: 85 },
    Skill { name: "Node.js", level: 80 },
    Skill { name: "TypeScript", level: 75 },
    Skill { name: "HTML/CSS", level: 90 },
    Skill { name: "Tailwind", level: 85 },
    Skill { name: "Git", level: 80 },
    Skill { name: "REST APIs", level: 85 },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Project Management Dashboard",
        description: "A modern project management tool built with React and Node.js",
        image: "https://images.unsplash.com/photo-1508873535684-277a3cbcc4e8",
        image_alt: "Project Management Dashboard",
        tags: &["React", "Node.js", "Express", "MongoDB"],
    },
    Project {
        title: "E-commerce Platform",
        description: "Full-featured e-commerce solution with payment integration",
        image: "https://images.unsplash.com/photo-1454165804606-c3d57bc86b40",
        image_alt: "E-commerce Platform",
        tags: &["React", "Redux", "Node.js", "Stripe"],
    },
    Project {
        title: "Social Media Analytics",
        description: "Real-time social media analytics and reporting platform",
        image: "https://images.unsplash.com/photo-1664580618281-fbc47baf6edf",
        image_alt: "Social Media Analytics",
        tags: &["React", "D3.js", "Node.js", "WebSocket"],
    },
    Project {
        title: "AI Content Generator",
        description: "AI-powered content generation and optimization tool",
        image: "https://images.unsplash.com/photo-1712668401428-df42b8bd93fc",
        image_alt: "AI Content Generator",
        tags: &["React", "Python", "OpenAI", "Flask"],
    },
];

pub const CAREER_MILESTONES: &[Milestone] = &[
    Milestone {
        year: "2016",
        title: "Junior Web Developer",
        company: "Pixel Studio",
        description: "Built marketing sites and learned the craft of shipping pixel-perfect interfaces on tight deadlines.",
        tech: &["HTML", "CSS", "jQuery"],
    },
    Milestone {
        year: "2018",
        title: "Full Stack Developer",
        company: "Web Solutions",
        description: "Delivered client dashboards end to end, from REST APIs to single-page frontends.",
        tech: &["React", "Node.js", "PostgreSQL"],
    },
    Milestone {
        year: "2020",
        title: "Senior Developer",
        company: "Tech Corp",
        description: "Led the rebuild of the customer portal and introduced a shared component library across four teams.",
        tech: &["TypeScript", "React", "GraphQL"],
    },
    Milestone {
        year: "2023",
        title: "Lead Engineer",
        company: "Tech Corp",
        description: "Own the frontend platform: performance budgets, design system and interactive 3D product previews.",
        tech: &["WebGL", "Rust", "WebAssembly"],
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Johnson",
        role: "Tech Lead at InnovateCorp",
        content: "John is an exceptional developer with a keen eye for detail. His work on our project exceeded expectations.",
        image: "https://images.unsplash.com/photo-1494790108377-be9c29b29330",
    },
    Testimonial {
        name: "Michael Chen",
        role: "CEO of DigitalFlow",
        content: "Working with John was a game-changer for our startup. His technical expertise and problem-solving skills are outstanding.",
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d",
    },
    Testimonial {
        name: "Emily Rodriguez",
        role: "Product Manager at TechSolutions",
        content: "John has a unique ability to transform complex requirements into elegant solutions. A true professional.",
        image: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn skill_levels_are_percentages() {
        assert!(SKILLS.iter().all(|s| s.level <= 100));
    }

    #[test]
    fn keyed_items_are_unique() {
        // Names double as list keys.
        let skills: HashSet<_> = SKILLS.iter().map(|s| s.name).collect();
        let projects: HashSet<_> = PROJECTS.iter().map(|p| p.title).collect();
        let years: HashSet<_> = CAREER_MILESTONES.iter().map(|m| m.year).collect();
        assert_eq!(skills.len(), SKILLS.len());
        assert_eq!(projects.len(), PROJECTS.len());
        assert_eq!(years.len(), CAREER_MILESTONES.len());
    }

    #[test]
    fn timeline_needs_two_milestones() {
        // Marker placement divides by len - 1.
        assert!(CAREER_MILESTONES.len() >= 2);
    }
}
