use super::{About, Blog, Contact, CoverLetter, Cv, Hero, Nav, Seo, Skills, Translations};

pub static EN: Translations = Translations {
    nav: Nav {
        home: "Home",
        about: "About",
        skills: "Skills",
        blog: "Blog",
        cover_letter: "Cover Letter",
        cv: "Resume",
        contact: "Contact",
    },
    hero: Hero {
        greeting: "Hello, I'm Mustafa Altas",
        cta_primary: "Get in Touch",
        cta_secondary: "Read the Blog",
    },
    about: About {
        title: "About Me",
        description: "I am a highly motivated developer with a relentless passion for learning. \
                      While I have a strong foundation in web development, my true strength lies \
                      in my ability to adapt to new technologies and challenges instantly. I \
                      approach every project with enthusiasm, high energy, and a desire to grow \
                      beyond boundaries.",
        experience_title: "Continuous Learner",
    },
    skills: Skills {
        title: "Technical Potential",
        subtitle: "My current stack and ability to master new tools",
    },
    blog: Blog {
        title: "Latest Articles",
        subtitle: "Notes on what I am learning and building",
        read_more: "Read More",
        maintenance_message: "The blog is getting a refresh. New posts are on the way.",
        view_all: "View All Posts",
        back_to_home: "Back to Home",
        back_to_blog: "Back to Blog",
        all_posts_title: "All Blog Posts",
        all_posts_subtitle: "Thoughts on development, learning, and technology",
        prev_page: "Previous",
        next_page: "Next",
        page: "Page",
        of: "of",
    },
    cover_letter: CoverLetter {
        title: "Motivation & Purpose",
        subtitle: "Why I am the right fit for your team",
        content: &[
            "To Whom It May Concern,",
            "Software development is more than just writing code for me; it is a continuous \
             journey of solving problems and creating value. Throughout my career, I have not \
             only focused on technical excellence but also on adapting to the ever-changing \
             landscape of technology. My greatest asset is not just what I know today, but how \
             quickly I can master what comes tomorrow.",
            "I thrive in dynamic environments where curiosity is rewarded and challenges are \
             seen as opportunities. Whether it's mastering a new framework overnight or \
             optimizing a complex system, I bring a level of energy and dedication that pushes \
             projects forward.",
            "I am eager to bring my adaptability, technical skills, and unwavering motivation \
             to your team to build impactful solutions together.",
        ],
    },
    cv: Cv {
        title: "Curriculum Vitae",
        description: "Want to see my journey and potential? Download my resume to explore my \
                      background, education, and the drive I bring to every team.",
        download: "Download Resume",
    },
    contact: Contact {
        title: "Let's Connect",
        name_placeholder: "Your Name",
        email_placeholder: "Your Email",
        message_placeholder: "How can I help you?",
        send: "Send Message",
    },
    seo: Seo {
        title: "Mustafa Altas | Motivated Tech Enthusiast",
        description: "Portfolio of Mustafa Altas, a highly motivated developer passionate about \
                      continuous learning and innovation.",
    },
};
