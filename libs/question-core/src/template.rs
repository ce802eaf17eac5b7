//! Reference markdown document for content authors.
//!
//! Demonstrates one example of each supported question format. The text
//! must stay in sync with the classifiers' accepted grammars; the
//! integration tests feed it back through the parser to keep it honest.

const TEMPLATE: &str = r##"# Questions Template

## Multiple Choice Questions (Simple Format)

1. What is the capital of France?
a) London
b) Berlin
c) Paris [correct]
d) Madrid

Explanation: Paris is the capital and largest city of France.
Category: Geography
Learning Path: World Geography
Topic: European Capitals

## Multiple Choice Questions (GitHub Style with Code)

###### 1. What's the output?

```javascript
function sayHi() {
  console.log(name);
  console.log(age);
  var name = 'Lydia';
  let age = 21;
}

sayHi();
```

- A: `Lydia` and `undefined`
- B: `Lydia` and `ReferenceError`
- C: `ReferenceError` and `21`
- D: `undefined` and `ReferenceError`

<details><summary><b>Answer</b></summary>
<p>

#### Answer: D

The `var` declaration is hoisted with a default value of `undefined`, so the
first log prints `undefined`. The `let` declaration is hoisted without being
initialized, so reading it before the declaration line throws a
`ReferenceError`.

</p>
</details>

---

## True/False Questions

2. The sun rises in the west.
False

Explanation: The sun rises in the east and sets in the west.
Category: Science
Learning Path: Basic Astronomy
Topic: Earth's Rotation

## Open-ended Questions

3. Explain the concept of object-oriented programming.

Category: Programming
Learning Path: Software Development Fundamentals
Topic: Programming Paradigms
Difficulty: medium

## Question with Full Metadata

4. What is React? [5 points]
a) A CSS framework
b) A JavaScript library [correct]
c) A database
d) A server
"##;

/// Generate the author-facing template.
pub fn generate_template() -> String {
    TEMPLATE.to_string()
}
