//! Personal details, education, experience and interests.

use super::{Education, Experience, Profile, SocialLinks};

pub const PROFILE: Profile = Profile {
    name: "Mohamed Bayomy",
    title: "Full Stack Developer",
    introduction: "I build modern, responsive web applications with a focus on user experience and clean code. \
                   Passionate about creating elegant solutions to complex problems.",
    hero_background: "https://images.unsplash.com/photo-1536148935331-408321065b18?q=80&w=1974&auto=format&fit=crop",
    about_title: "About Me",
    about_subtitle: "Software Developer & Problem Solver",
    bio: "I'm a highly skilled and results-driven Software Developer with over 4 years of experience building web \
          applications and developing innovative solutions in C#, PHP (Laravel), and JavaScript. Proven track record \
          in full-stack development using Magento 2, React JavaScript, and SQL Server. Skilled in optimizing \
          workflows, enhancing debugging processes, and maintaining transparent communication with stakeholders.",
    photo_url: "https://media.licdn.com/dms/image/v2/D5603AQGWCh7dGj1DFg/profile-displayphoto-shrink_400_400/profile-displayphoto-shrink_400_400/0/1683582085846",
    email: "mohamedoo1997@hotmail.com",
    resume_url: "/resume.pdf",
    social: SocialLinks {
        github: Some("https://github.com/azooz59T"),
        linkedin: Some("https://www.linkedin.com/in/mohamed-bayomy-9a9583222/"),
    },
};

pub const EDUCATION: &[Education] = &[
    Education {
        degree: "Bachelor of Science in Computer Science",
        institution: "Aston University",
        year: "2021",
    },
    Education { degree: "Adobe Professional Developer", institution: "Adobe", year: "2023" },
];

pub const EXPERIENCE: &[Experience] = &[
    Experience {
        position: "Programming support officer",
        company: "Aston University",
        duration: "2024 - Present",
        description: "Led and enhanced OOP teaching modules at Aston University using Java and PHP, as well as \
                      providing technical support for students requiring help developing and maintaining their \
                      websites.",
    },
    Experience {
        position: "Full Stack Developer",
        company: "Magic 42",
        duration: "2022 - 2023",
        description: "Develop and maintain Magento 2 e-commerce websites for multiple clients and enhanced \
                      debugging processes to streamline issue resolution, resulting in improved efficiency. \
                      Maintained transparent communication with stakeholders throughout the issue investigation \
                      and resolution phases, providing timely status updates.",
    },
];

pub const INTERESTS: &[&str] = &[
    "Open Source Contribution",
    "Cloud Computing",
    "Machine Learning",
    "Swimming",
    "History",
];
