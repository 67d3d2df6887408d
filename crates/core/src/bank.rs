//! The standard 50-item emotional-intelligence questionnaire.
//!
//! Ids interleave across categories (1 = SA, 2 = ME, 3 = MO, 4 = E, 5 = SS,
//! 6 = SA, ...) while sections group them by category.

use crate::model::{Category, Question, QuestionBank, Section};

use Category::{
    Empathy as E, ManagingEmotions as ME, MotivatingOneself as MO, SelfAwareness as SA,
    SocialSkill as SS,
};

/// Number of questions in every section.
pub const QUESTIONS_PER_SECTION: usize = 10;

/// Lowest and highest possible category total.
pub const MIN_CATEGORY_SCORE: u16 = 10;
pub const MAX_CATEGORY_SCORE: u16 = 50;

static SELF_AWARENESS: [Question; QUESTIONS_PER_SECTION] = [
    Question::new(1, SA, "I realise immediately when I lose my temper"),
    Question::new(6, SA, "I know when I am happy"),
    Question::new(11, SA, "I usually recognise when I am stressed"),
    Question::new(16, SA, "When I am being 'emotional' I am aware of this"),
    Question::new(21, SA, "When I feel anxious, I usually can account for the reason(s)"),
    Question::new(26, SA, "I always know when I'm being unreasonable"),
    Question::new(31, SA, "Awareness of my own emotions is very important to me at all times"),
    Question::new(36, SA, "I can tell if someone has upset or annoyed me"),
    Question::new(41, SA, "I can let anger 'go' quickly so that it no longer affects me"),
    Question::new(46, SA, "I know what makes me happy"),
];

static MANAGING_EMOTIONS: [Question; QUESTIONS_PER_SECTION] = [
    Question::new(2, ME, "I can 'reframe' bad situations quickly"),
    Question::new(7, ME, "I do not wear my 'heart on my sleeve'"),
    Question::new(12, ME, "Others can rarely tell what kind of mood I am in"),
    Question::new(17, ME, "I rarely 'fly off the handle' at other people"),
    Question::new(22, ME, "Difficult people do not annoy me"),
    Question::new(27, ME, "I can consciously alter my frame of mind or mood"),
    Question::new(
        32,
        ME,
        "I do not let stressful situations or people affect me once I have left work",
    ),
    Question::new(37, ME, "I rarely worry about work or life in general"),
    Question::new(42, ME, "I can suppress my emotions when I need to"),
    Question::new(47, ME, "Others often do not know how I am feeling about things"),
];

static MOTIVATING_ONESELF: [Question; QUESTIONS_PER_SECTION] = [
    Question::new(3, MO, "I am able to always motivate myself to do difficult tasks"),
    Question::new(
        8,
        MO,
        "I am usually able to prioritise important activities at work and get on with them",
    ),
    Question::new(13, MO, "I always meet deadlines"),
    Question::new(18, MO, "I never waste time"),
    Question::new(23, MO, "I do not deviate from the truth"),
    Question::new(28, MO, "I believe you should do the difficult things first"),
    Question::new(33, MO, "Delayed gratification is a virtue that I hold to"),
    Question::new(38, MO, "I believe in 'Action this Day'"),
    Question::new(43, MO, "I can always motivate myself even when I feel low"),
    Question::new(48, MO, "Motivations has been the key to my success"),
];

static EMPATHY: [Question; QUESTIONS_PER_SECTION] = [
    Question::new(4, E, "I am always able to see things from the other person's viewpoint"),
    Question::new(9, E, "I am excellent at empathising with someone else's problem"),
    Question::new(14, E, "I can tell if someone is not happy with me"),
    Question::new(19, E, "I can tell if a team of people are not getting along with each other"),
    Question::new(24, E, "I can usually understand why people are being difficult towards me"),
    Question::new(29, E, "I believe other individuals are not 'difficult' just 'different'"),
    Question::new(34, E, "I can understand if I am being unreasonable"),
    Question::new(39, E, "I can understand why my actions sometimes offend others"),
    Question::new(44, E, "I can sometimes see things from others' point of view"),
    Question::new(49, E, "Reasons for disagreements are always clear to me"),
];

static SOCIAL_SKILL: [Question; QUESTIONS_PER_SECTION] = [
    Question::new(5, SS, "I am an excellent listener"),
    Question::new(10, SS, "I never interrupt other people's conversations"),
    Question::new(15, SS, "I am good at adapting and mixing with a variety of people"),
    Question::new(20, SS, "People are the most interesting thing in life for me"),
    Question::new(
        25,
        SS,
        "I love to meet new people and get to know what makes them 'tick'",
    ),
    Question::new(30, SS, "I need a variety of work colleagues to make my job interesting"),
    Question::new(35, SS, "I like to ask questions to find out what it is important to people"),
    Question::new(
        40,
        SS,
        "I see working with difficult people as simply a challenge to win them over",
    ),
    Question::new(45, SS, "I am good at reconciling differences with other people"),
    Question::new(50, SS, "I generally build solid relationships with those I work with"),
];

static SECTIONS: [Section; 5] = [
    Section {
        category: SA,
        questions: &SELF_AWARENESS,
    },
    Section {
        category: ME,
        questions: &MANAGING_EMOTIONS,
    },
    Section {
        category: MO,
        questions: &MOTIVATING_ONESELF,
    },
    Section {
        category: E,
        questions: &EMPATHY,
    },
    Section {
        category: SS,
        questions: &SOCIAL_SKILL,
    },
];

/// The questionnaire used by the application.
pub static QUESTION_BANK: QuestionBank = QuestionBank::new(&SECTIONS);
