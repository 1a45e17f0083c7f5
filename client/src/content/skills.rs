//! Skills panel entries, listed in display order.

use super::Skill;

const fn skill(name: &'static str, proficiency: u8, category: &'static str) -> Skill {
    Skill { name, proficiency, category }
}

pub const SKILLS: &[Skill] = &[
    skill("React", 70, "Frontend"),
    skill("TypeScript", 85, "Frontend"),
    skill("PHP Laravel", 80, "Backend"),
    skill("C# .NET", 75, "Backend"),
    skill("MySQL", 70, "Database"),
    skill("Microsoft SQL Server", 65, "Database"),
    skill("GraphQL", 60, "API"),
    skill("Docker", 75, "DevOps"),
    skill("AWS", 35, "Cloud"),
    skill("Git", 85, "Tools"),
    skill("Tailwind CSS", 80, "Frontend"),
    skill("REST", 75, "API"),
];
