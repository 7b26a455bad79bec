pub mod resume;

pub use resume::{
    Achievement, AwardEntry, CertificationEntry, ContactInfo, EducationEntry, ExperienceEntry,
    Link, PublicationEntry, ResumeDocument, SkillGroup,
};
