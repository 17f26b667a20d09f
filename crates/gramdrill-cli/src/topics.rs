//! Static grammar reference content.
//!
//! Opaque payloads as far as the engine is concerned: the CLI only lists and
//! prints them.

/// One reference topic.
pub struct Topic {
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub body: &'static str,
}

/// Look up a topic by slug.
pub fn find(slug: &str) -> Option<&'static Topic> {
    TOPICS.iter().find(|t| t.slug == slug)
}

pub const TOPICS: &[Topic] = &[
    Topic {
        slug: "parts-of-speech",
        title: "Parts of Speech",
        summary: "The eight main word classes of English.",
        body: "\
English has eight main parts of speech:

  1. Nouns — name people, places, things, or ideas: cat, London, happiness.
     Common (dog, city), proper (Paris), abstract (love), collective (team).
  2. Verbs — express actions, states, or occurrences: run, think, become.
     Action (jump), linking (be, seem), helping (have, will, must).
  3. Adjectives — describe or modify nouns: beautiful, large, red.
  4. Adverbs — modify verbs, adjectives, or other adverbs: quickly, very.
  5. Pronouns — replace nouns: he, she, it, they, who, which.
  6. Prepositions — relate nouns to other words: in, on, at, by, with.
  7. Conjunctions — connect words, phrases, or clauses: and, but, because.
  8. Interjections — express emotion: oh, wow, alas, hurray.",
    },
    Topic {
        slug: "tenses",
        title: "Verb Tenses",
        summary: "Three time periods, four aspects each.",
        body: "\
English has three main time periods, each with four aspects:

  Present: I work / I am working / I have worked / I have been working.
  Past:    I worked / I was working / I had worked / I had been working.
  Future:  I will work / I will be working / I will have worked /
           I will have been working.

Usage tips: simple tenses for facts and regular actions, continuous for
ongoing actions, perfect for completed actions relevant to another time,
perfect continuous for ongoing actions with duration.",
    },
    Topic {
        slug: "sentence-structure",
        title: "Sentence Structure",
        summary: "Simple, compound, complex, and compound-complex sentences.",
        body: "\
  Simple: one independent clause. The cat sleeps.
  Compound: two or more independent clauses joined by a coordinating
  conjunction. I wanted to go, but it was raining.
  Complex: an independent clause plus at least one dependent clause.
  Although it was raining, we went for a walk.
  Compound-complex: two or more independent clauses and at least one
  dependent clause.",
    },
    Topic {
        slug: "punctuation",
        title: "Punctuation",
        summary: "Commas, apostrophes, semicolons, and friends.",
        body: "\
  Period (.) ends a statement. Question mark (?) ends a direct question.
  Comma (,) separates items in a list, clauses, and introductory phrases.
  Apostrophe (') marks possession (the dog's bone) and contraction (don't).
  Semicolon (;) joins closely related independent clauses.
  Colon (:) introduces a list, quotation, or explanation.",
    },
    Topic {
        slug: "voice",
        title: "Active and Passive Voice",
        summary: "Who does the action, and how the sentence says so.",
        body: "\
  Active voice: the subject performs the action. Shakespeare wrote the book.
  Passive voice: the subject receives the action. The book was written by
  Shakespeare.

Tips: prefer active voice for clearer writing; the \"by\" phrase can often
be omitted in passive voice; intransitive verbs cannot be made passive.",
    },
];
