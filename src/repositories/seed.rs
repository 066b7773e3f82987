use crate::models::domain::{Category, Question};

pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new(1, "Science"),
        Category::new(2, "Art"),
        Category::new(3, "Geography"),
        Category::new(4, "History"),
        Category::new(5, "Entertainment"),
        Category::new(6, "Sports"),
    ]
}

/// Starter question set loaded by the in-memory store.
pub fn sample_questions() -> Vec<Question> {
    [
        (1, "What boxer's original name is Cassius Clay?", "Muhammad Ali", 4, 1),
        (2, "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 4, 2),
        (3, "Which dung beetle was worshipped by the ancient Egyptians?", "Scarab", 4, 4),
        (4, "What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 5, 4),
        (5, "What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?", "Tom Cruise", 5, 4),
        (6, "Which is the only team to play in every soccer World Cup tournament?", "Brazil", 6, 3),
        (7, "Which country won the first ever soccer World Cup in 1930?", "Uruguay", 6, 4),
        (8, "What is the largest lake in Africa?", "Lake Victoria", 3, 2),
        (9, "In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 3, 3),
        (10, "The Taj Mahal is located in which Indian city?", "Agra", 3, 2),
        (11, "Which Dutch graphic artist, initials M C, was a creator of optical illusions?", "Escher", 2, 1),
        (12, "La Giaconda is better known as what?", "Mona Lisa", 2, 3),
        (13, "How many paintings did Van Gogh sell in his lifetime?", "One", 2, 4),
        (14, "Which American artist was a pioneer of Abstract Expressionism, and a leading exponent of action painting?", "Jackson Pollock", 2, 2),
        (15, "What is the heaviest organ in the human body?", "The Liver", 1, 4),
        (16, "Who discovered penicillin?", "Alexander Fleming", 1, 3),
        (17, "Hematology is a branch of medicine involving the study of what?", "Blood", 1, 4),
        (18, "Which planet is known as the red planet?", "Mars", 1, 1),
        (19, "How many players make up a basketball team on the court?", "Five", 6, 1),
    ]
    .into_iter()
    .map(|(id, question, answer, category, difficulty)| Question {
        id,
        question: question.to_string(),
        answer: answer.to_string(),
        category,
        difficulty,
    })
    .collect()
}
