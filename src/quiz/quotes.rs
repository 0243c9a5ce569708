use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub character: String,
    pub movie: String,
}

impl Quote {
    pub fn new(text: &str, character: &str, movie: &str) -> Self {
        Quote {
            text: text.into(),
            character: character.into(),
            movie: movie.into(),
        }
    }

    /// The first `words` words of the quote, followed by an ellipsis when
    /// anything was cut.
    pub fn teaser(&self, words: usize) -> String {
        let all: Vec<&str> = self.text.split_whitespace().collect();
        if all.len() <= words {
            return all.join(" ");
        }
        format!("{}...", all[..words].join(" "))
    }
}

/// A non-empty table of quotes, addressed by index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteBook {
    quotes: Vec<Quote>,
}

impl QuoteBook {
    pub fn new(quotes: Vec<Quote>) -> Result<Self> {
        if quotes.is_empty() {
            bail!("quote table is empty");
        }
        Ok(QuoteBook { quotes })
    }

    pub fn builtin() -> Self {
        QuoteBook { quotes: builtin_quotes() }
    }

    /// Read a JSON array of quotes.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let quotes: Vec<Quote> = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Self::new(quotes).with_context(|| format!("No quotes in {}", path.display()))
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Always false: a book holds at least one quote.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Quote at `index`, wrapping around the end of the table.
    pub fn get(&self, index: usize) -> &Quote {
        &self.quotes[index % self.quotes.len()]
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }
}

fn builtin_quotes() -> Vec<Quote> {
    [
        ("Frankly, my dear, I don't give a damn.", "Rhett Butler", "Gone with the Wind"),
        ("I'm gonna make him an offer he can't refuse.", "Vito Corleone", "The Godfather"),
        ("Here's looking at you, kid.", "Rick Blaine", "Casablanca"),
        ("Go ahead, make my day.", "Harry Callahan", "Sudden Impact"),
        ("May the Force be with you.", "Han Solo", "Star Wars"),
        ("You talkin' to me?", "Travis Bickle", "Taxi Driver"),
        ("Toto, I've a feeling we're not in Kansas anymore.", "Dorothy Gale", "The Wizard of Oz"),
        ("Louis, I think this is the beginning of a beautiful friendship.", "Rick Blaine", "Casablanca"),
        ("Bond. James Bond.", "James Bond", "Dr. No"),
        ("There's no place like home.", "Dorothy Gale", "The Wizard of Oz"),
        ("Show me the money!", "Rod Tidwell", "Jerry Maguire"),
        ("You can't handle the truth!", "Col. Nathan R. Jessup", "A Few Good Men"),
        ("I'll be back.", "The Terminator", "The Terminator"),
        ("Mama always said life was like a box of chocolates.", "Forrest Gump", "Forrest Gump"),
        ("You're gonna need a bigger boat.", "Martin Brody", "Jaws"),
        ("Houston, we have a problem.", "Jim Lovell", "Apollo 13"),
        ("Keep your friends close, but your enemies closer.", "Michael Corleone", "The Godfather Part II"),
        ("I see dead people.", "Cole Sear", "The Sixth Sense"),
        ("Say hello to my little friend!", "Tony Montana", "Scarface"),
        ("Nobody puts Baby in a corner.", "Johnny Castle", "Dirty Dancing"),
        ("Hasta la vista, baby.", "The Terminator", "Terminator 2: Judgment Day"),
        ("Elementary, my dear Watson.", "Sherlock Holmes", "The Adventures of Sherlock Holmes"),
        ("I feel the need, the need for speed!", "Maverick", "Top Gun"),
        ("Carpe diem. Seize the day, boys. Make your lives extraordinary.", "John Keating", "Dead Poets Society"),
        ("Why so serious?", "The Joker", "The Dark Knight"),
        ("To infinity and beyond!", "Buzz Lightyear", "Toy Story"),
        ("E.T. phone home.", "E.T.", "E.T. the Extra-Terrestrial"),
        ("Life moves pretty fast. If you don't stop and look around once in a while, you could miss it.", "Ferris Bueller", "Ferris Bueller's Day Off"),
        ("What we've got here is failure to communicate.", "Captain", "Cool Hand Luke"),
        ("I'm the king of the world!", "Jack Dawson", "Titanic"),
        ("Here's Johnny!", "Jack Torrance", "The Shining"),
        ("Rosebud.", "Charles Foster Kane", "Citizen Kane"),
        ("I'm walking here! I'm walking here!", "Ratso Rizzo", "Midnight Cowboy"),
        ("Of all the gin joints in all the towns in all the world, she walks into mine.", "Rick Blaine", "Casablanca"),
        ("Play it, Sam. Play 'As Time Goes By.'", "Ilsa Lund", "Casablanca"),
        ("We'll always have Paris.", "Rick Blaine", "Casablanca"),
        ("Round up the usual suspects.", "Captain Louis Renault", "Casablanca"),
        ("I coulda been a contender.", "Terry Malloy", "On the Waterfront"),
        ("Fasten your seatbelts. It's going to be a bumpy night.", "Margo Channing", "All About Eve"),
        ("All right, Mr. DeMille, I'm ready for my close-up.", "Norma Desmond", "Sunset Boulevard"),
        ("I am big! It's the pictures that got small.", "Norma Desmond", "Sunset Boulevard"),
        ("A census taker once tried to test me. I ate his liver with some fava beans and a nice chianti.", "Hannibal Lecter", "The Silence of the Lambs"),
        ("Open the pod bay doors, HAL.", "Dave Bowman", "2001: A Space Odyssey"),
        ("I'm sorry, Dave. I'm afraid I can't do that.", "HAL 9000", "2001: A Space Odyssey"),
        ("Love means never having to say you're sorry.", "Jennifer Cavilleri", "Love Story"),
        ("The stuff that dreams are made of.", "Sam Spade", "The Maltese Falcon"),
        ("Made it, Ma! Top of the world!", "Cody Jarrett", "White Heat"),
        ("Mrs. Robinson, you're trying to seduce me. Aren't you?", "Benjamin Braddock", "The Graduate"),
        ("If you build it, he will come.", "The Voice", "Field of Dreams"),
        ("There's no crying in baseball!", "Jimmy Dugan", "A League of Their Own"),
        ("I'm as mad as hell, and I'm not going to take this anymore!", "Howard Beale", "Network"),
        ("Greed, for lack of a better word, is good.", "Gordon Gekko", "Wall Street"),
        ("You had me at hello.", "Dorothy Boyd", "Jerry Maguire"),
        ("I'll have what she's having.", "Customer", "When Harry Met Sally..."),
        ("Well, nobody's perfect.", "Osgood Fielding III", "Some Like It Hot"),
        ("Soylent Green is people!", "Robert Thorn", "Soylent Green"),
        ("Take your stinking paws off me, you damned dirty ape!", "George Taylor", "Planet of the Apes"),
        ("They call me Mister Tibbs!", "Virgil Tibbs", "In the Heat of the Night"),
        ("Attica! Attica!", "Sonny Wortzik", "Dog Day Afternoon"),
        ("I love the smell of napalm in the morning.", "Bill Kilgore", "Apocalypse Now"),
        ("Wax on, wax off.", "Mr. Miyagi", "The Karate Kid"),
        ("Gentlemen, you can't fight in here! This is the War Room!", "President Merkin Muffley", "Dr. Strangelove"),
        ("A martini. Shaken, not stirred.", "James Bond", "Goldfinger"),
        ("Hello, gorgeous.", "Fanny Brice", "Funny Girl"),
        ("Snap out of it!", "Loretta Castorini", "Moonstruck"),
        ("My precious.", "Gollum", "The Lord of the Rings: The Two Towers"),
        ("You shall not pass!", "Gandalf", "The Lord of the Rings: The Fellowship of the Ring"),
        ("No, I am your father.", "Darth Vader", "The Empire Strikes Back"),
        ("I am serious. And don't call me Shirley.", "Dr. Rumack", "Airplane!"),
        ("Inconceivable!", "Vizzini", "The Princess Bride"),
        ("Hello. My name is Inigo Montoya. You killed my father. Prepare to die.", "Inigo Montoya", "The Princess Bride"),
        ("Roads? Where we're going, we don't need roads.", "Dr. Emmett Brown", "Back to the Future"),
        ("Get busy living, or get busy dying.", "Andy Dufresne", "The Shawshank Redemption"),
        ("Life, uh, finds a way.", "Ian Malcolm", "Jurassic Park"),
        ("There can be only one.", "Connor MacLeod", "Highlander"),
        ("Just keep swimming.", "Dory", "Finding Nemo"),
        ("You're killing me, Smalls!", "Ham Porter", "The Sandlot"),
        ("Hakuna matata! It means no worries.", "Timon", "The Lion King"),
        ("They may take our lives, but they'll never take our freedom!", "William Wallace", "Braveheart"),
        ("Are you not entertained?", "Maximus", "Gladiator"),
        ("I drink your milkshake!", "Daniel Plainview", "There Will Be Blood"),
        ("The first rule of Fight Club is: you do not talk about Fight Club.", "Tyler Durden", "Fight Club"),
        ("What's in the box?", "David Mills", "Se7en"),
        ("The greatest trick the devil ever pulled was convincing the world he didn't exist.", "Verbal Kint", "The Usual Suspects"),
        ("Wait a minute, wait a minute. You ain't heard nothin' yet!", "Jakie Rabinowitz", "The Jazz Singer"),
        ("You've got to ask yourself one question: 'Do I feel lucky?' Well, do ya, punk?", "Harry Callahan", "Dirty Harry"),
        ("I'm just a girl, standing in front of a boy, asking him to love her.", "Anna Scott", "Notting Hill"),
        ("Why don't you come up sometime and see me?", "Lady Lou", "She Done Him Wrong"),
        ("Oh, no, it wasn't the airplanes. It was Beauty killed the Beast.", "Carl Denham", "King Kong"),
        ("Forget it, Jake. It's Chinatown.", "Lawrence Walsh", "Chinatown"),
        ("After all, tomorrow is another day!", "Scarlett O'Hara", "Gone with the Wind"),
        ("Listen to them. Children of the night. What music they make.", "Count Dracula", "Dracula"),
        ("It's alive! It's alive!", "Henry Frankenstein", "Frankenstein"),
        ("Badges? We ain't got no badges!", "Gold Hat", "The Treasure of the Sierra Madre"),
        ("Mother of mercy, is this the end of Rico?", "Rico Bandello", "Little Caesar"),
        ("I want to be alone.", "Grusinskaya", "Grand Hotel"),
        ("Yo, Adrian!", "Rocky Balboa", "Rocky"),
        ("The Dude abides.", "The Dude", "The Big Lebowski"),
        ("With great power comes great responsibility.", "Ben Parker", "Spider-Man"),
        ("Keep the change, ya filthy animal.", "Johnny", "Home Alone"),
    ]
    .into_iter()
    .map(|(text, character, movie)| Quote::new(text, character, movie))
    .collect()
}
