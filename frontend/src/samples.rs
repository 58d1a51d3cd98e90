use folio_shared::BlogPost;

/// Bundled posts shown whenever the backend returns nothing. The public
/// pages must never render empty, so this set is the floor.
pub fn sample_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: "sample-wasm-frontend".to_string(),
            title: "Why I Am Betting on WebAssembly for the Frontend".to_string(),
            excerpt: "After years of shipping JavaScript bundles, I spent a month building \
                      the same app twice. Here is what WebAssembly changed about how I think \
                      about frontend architecture."
                .to_string(),
            category: "WebAssembly".to_string(),
            image: "https://images.unsplash.com/photo-1555066931-4365d14bab8c?auto=format&fit=crop&q=80&w=800".to_string(),
            read_time: "6 min read".to_string(),
            date: "July 18, 2025".to_string(),
            content: vec![
                "The first time I compiled a real application to WebAssembly, the thing that \
                 surprised me was not the performance. It was how little I had to change about \
                 the way I already worked. The toolchain handled the strange parts, and what \
                 was left looked a lot like the component code I write every day."
                    .to_string(),
                "I rebuilt a dashboard we had in production, feature for feature. The \
                 JavaScript version had grown the usual way: a state library here, a memo \
                 wrapper there, a re-render bug that only showed up on slow tablets. The \
                 compiled version forced me to decide up front who owned which piece of state, \
                 and that constraint removed an entire class of bugs before they existed."
                    .to_string(),
                "There are real costs. Binary size matters and you have to watch it. \
                 Interop with the DOM goes through a boundary that punishes chatty code. \
                 Hiring is harder, and your teammates need time to ramp up. None of that is \
                 hand-waving, and for plenty of apps the tradeoff is not worth it yet."
                    .to_string(),
                "But the trend line is what convinced me. Every release of the tooling \
                 shaves the rough edges, and the parts that felt experimental two years ago \
                 now feel boring in the best possible way. Boring is what you want from the \
                 layer your product stands on."
                    .to_string(),
                "If you are curious, my advice is to pick one interior widget with gnarly \
                 logic and port just that. You will learn more from one honest week than \
                 from any number of benchmark posts, including this one."
                    .to_string(),
            ],
        },
        BlogPost {
            id: "sample-typescript-habits".to_string(),
            title: "Five TypeScript Habits That Made My Code Easier to Review".to_string(),
            excerpt: "Code review taught me more about types than any tutorial. These are \
                      the five habits reviewers thanked me for, with the mistakes that \
                      taught me each one."
                .to_string(),
            category: "TypeScript".to_string(),
            image: "https://images.unsplash.com/photo-1516116216624-53e697fedbea?auto=format&fit=crop&q=80&w=800".to_string(),
            read_time: "4 min read".to_string(),
            date: "June 2, 2025".to_string(),
            content: vec![
                "Most of what I know about writing reviewable code I learned from the \
                 comments people left on my pull requests. The patterns below all started as \
                 a reviewer asking the same question twice."
                    .to_string(),
                "First, name the shape before you use it. An inline object type is fine \
                 until the second function needs it, and by then nobody wants to extract it. \
                 Declaring the interface first costs thirty seconds and makes the diff read \
                 like documentation."
                    .to_string(),
                "Second, make impossible states unrepresentable. A form that tracks \
                 loading, error, and data as three independent fields has eight states, and \
                 five of them are lies. A discriminated union has three. Reviewers stopped \
                 asking what happens when loading and error are both true because the \
                 compiler made the question unaskable."
                    .to_string(),
                "Third, return early and narrow. Guard clauses are not just style. Each \
                 one tightens the type for every line after it, so the happy path at the \
                 bottom of the function needs no assertions at all."
                    .to_string(),
                "Fourth, treat any as a loan you pay back in the same pull request. And \
                 fifth, when a type gets complicated enough to need a comment, it is usually \
                 two types wearing a coat. Split it and both halves become obvious."
                    .to_string(),
            ],
        },
        BlogPost {
            id: "sample-learning-in-public".to_string(),
            title: "Learning in Public: What a Year of Blogging Taught Me".to_string(),
            excerpt: "Twelve months ago I published my first post, convinced nobody would \
                      read it. Here is what actually happened, and why the writing mattered \
                      more than the readers."
                .to_string(),
            category: "Career".to_string(),
            image: "https://images.unsplash.com/photo-1499750310107-5fef28a66643?auto=format&fit=crop&q=80&w=800".to_string(),
            read_time: "5 min read".to_string(),
            date: "April 23, 2025".to_string(),
            content: vec![
                "I started this blog because a mentor told me that the fastest way to find \
                 the holes in your understanding is to explain something to a stranger. She \
                 was right, though not in the way I expected."
                    .to_string(),
                "The holes never showed up while writing the confident paragraphs. They \
                 showed up in the transitions, the places where I wanted to write \
                 \"therefore\" and realized I could not justify it. Every post I published \
                 taught me something I thought I already knew."
                    .to_string(),
                "The readership question turned out to be a distraction. Some posts got a \
                 few hundred visits, most got a dozen, and the correlation with effort was \
                 zero. What did correlate with effort was what I retained. The posts I \
                 rewrote three times are the topics I can still explain on a whiteboard \
                 today without notes."
                    .to_string(),
                "There were practical wins too. Two interviews opened with a question \
                 about something I had written, which is a far better opening than a \
                 whiteboard puzzle. A post about a build tool bug got a comment from one of \
                 the maintainers, and that thread fixed my understanding and the docs."
                    .to_string(),
                "If you are on the fence, publish the post you wish you had found when you \
                 were stuck. One person will find it at two in the morning with the same \
                 error message, and for that person your half-polished notes are worth more \
                 than a perfect tutorial."
                    .to_string(),
            ],
        },
    ]
}
