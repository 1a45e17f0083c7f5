//! Project gallery entries.

use super::{Project, Technology};

const fn tech(name: &'static str, color: &'static str) -> Technology {
    Technology { name, color }
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: "1",
        title: "Recruitment Software",
        description: "A Recruitment Website that allows hiring managers or agencies to view, assess and match \
                      candidates with relative job openings.",
        long_description: Some(
            "This Project utilizes an ASP.NET Core API for the backend and TypeScript and React.js for the \
             front-end to create a seamless and elegant recruitment web application that helps hiring agents \
             allocate the right job to the right person. It features Jobs, Candidates and Company entities so \
             the user can create a company along with its corresponding jobs, and store and retrieve the CVs and \
             cover letters for each candidate. The application is fully responsive and provides multiple \
             features across all devices. The View Code button links to the backend repository; the front-end \
             code lives at https://github.com/azooz59T/recruitment-project-frontend.",
        ),
        thumbnail: "https://images.unsplash.com/photo-1563013544-824ae1b704d3?w=800&q=80",
        images: &[
            "https://images.unsplash.com/photo-1563013544-824ae1b704d3?w=800&q=80",
            "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=800&q=80",
            "https://images.unsplash.com/photo-1556740758-90de374c12ad?w=800&q=80",
        ],
        technologies: &[
            tech("React", "#3b82f6"),
            tech("TypeScript", "#22c55e"),
            tech("Microsoft SQL Server", "#15803d"),
            tech("ASP.NET Core 7.0", "#a855f7"),
            tech("Material UI", "#06b6d4"),
        ],
        category: ".NET",
        live_url: None,
        github_url: Some("https://github.com/azooz59T/Recruitment-Project-Backend"),
        challenges: &[],
        solutions: &[],
    },
    Project {
        id: "2",
        title: "Shopping list web application",
        description: "A Todo shopping list to keep track and manage user's items",
        long_description: Some(
            "A simple Laravel shopping list built using PHP Laravel, MySQL, JavaScript, Tailwind CSS, and \
             Bootstrap that allows the user to manage and keep track of their shopping items. Basic functionality \
             includes adding Name, Description, Quantity, Price, and Ticked (cross it off the list) attributes \
             for each item. The user is also able to set a maximum budget for the shopping list to not exceed a \
             fixed total price. There are other miscellaneous features such as dragging and dropping items from \
             the list to prioritize them. And finally, the project comes with simple unit testing to help ensure \
             code quality.",
        ),
        thumbnail: "https://images.unsplash.com/photo-1540350394557-8d14678e7f91?w=800&q=80",
        images: &[
            "https://images.unsplash.com/photo-1540350394557-8d14678e7f91?w=800&q=80",
            "https://images.unsplash.com/photo-1484480974693-6ca0a78fb36b?w=800&q=80",
        ],
        technologies: &[
            tech("PHP-Laravel", "#3b82f6"),
            tech("Tailwind CSS", "#eab308"),
            tech("JavaScript", "#9333ea"),
            tech("MySQL", "#60a5fa"),
        ],
        category: "Laravel",
        live_url: None,
        github_url: Some("https://github.com/azooz59T/Shopping-List"),
        challenges: &[],
        solutions: &[],
    },
    Project {
        id: "3",
        title: "Birthday Cake Tracker",
        description: "A Birthday Cake Tracker designed to keep track of developer's birthdays and cake.",
        long_description: Some(
            "Everyone deserves to celebrate their birthday with cake. This small Laravel/Vue application tracks \
             developers' birthdays and cakes following a set of rules: a small cake is provided on the \
             employee's first working day after their birthday, all employees get their birthday off, and there \
             is never more than one cake per day, with additional rules described in the repository's README.",
        ),
        thumbnail: "https://plus.unsplash.com/premium_photo-1663839412015-a47e43df7d2c?q=80&w=2070&auto=format&fit=crop",
        images: &[
            "https://plus.unsplash.com/premium_photo-1663839412015-a47e43df7d2c?q=80&w=2070&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1604413191066-4dd20bedf486?q=80&w=1920&auto=format&fit=crop",
        ],
        technologies: &[
            tech("PHP-Laravel", "#facc15"),
            tech("Vue.js", "#93c5fd"),
            tech("MySQL", "#ec4899"),
            tech("Tailwind CSS", "#4ade80"),
        ],
        category: "Laravel",
        live_url: None,
        github_url: Some("https://github.com/azooz59T/BirthdayCake"),
        challenges: &[],
        solutions: &[],
    },
    Project {
        id: "4",
        title: "MvcMovie Application",
        description: "An IMDB like application to list and rate your favorite movies.",
        long_description: Some(
            "This is my first and simplest C# application to record your favorite movies with basic data such as \
             Title, Release date, genre and more. The application uses the Model-View-Controller architectural \
             pattern and Entity Framework on Microsoft SQL Server.",
        ),
        thumbnail: "https://images.unsplash.com/photo-1583719444869-7e9c79d697e2?q=80&w=1974&auto=format&fit=crop",
        images: &[
            "https://images.unsplash.com/photo-1583719444869-7e9c79d697e2?q=80&w=1974&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1694705268819-80fcf37e35ac?q=80&w=2070&auto=format&fit=crop",
        ],
        technologies: &[
            tech("ASP.NET Core 7.0", "#3b82f6"),
            tech("Razor", "#1f2937"),
            tech("Microsoft SQL Server", "#eab308"),
        ],
        category: ".NET",
        live_url: None,
        github_url: Some("https://github.com/azooz59T/MvcMovie"),
        challenges: &[],
        solutions: &[],
    },
];
