//! Step template renderers.
//!
//! One pure function per curriculum step. Each returns the literal markdown
//! body for that step with the given substitutions applied; the wording,
//! whitespace, and emoji shortcodes are part of the contract with users, so
//! the bodies are reproduced exactly (including tab-indented sub-lists and
//! trailing-whitespace quirks carried over from earlier releases).
//!
//! Step selection lives in `crate::webhooks::handlers`; nothing here inspects
//! repository state.

use crate::types::{IssueNumber, PrNumber};

/// The inline draft comment attached to the change-request review.
pub const REVIEW_FILE_PROMPT: &str = "Replace this with a quotation or meme or witty comment";

/// Greeting posted when the training issue is opened.
pub fn render_welcome(login: &str) -> String {
    format!(
        r##"# :wave: Welcome to GitHub Training, @{login}!

I’ll guide you through some important first steps in coding and collaborating on GitHub.

This is an issue <sup>[:book:](https://help.github.com/articles/github-glossary/#issue)</sup>: a place to record bugs, request enhancements, or answer questions about your repo.

<hr>
<h3 align="center">Keep reading below to find your first task</h3>"##
    )
}

/// Step 1, posted directly after the welcome comment.
pub fn render_assign_yourself() -> String {
    r##"## Step 1: Assign yourself

Unassigned issues don't have owners to look after them. 

### :keyboard: Activity

1. On the right side of the screen, under the "Assignees" section, click the gear icon and select yourself
		
<hr>
<h3 align="center">I'll respond when I detect you've assigned yourself to this issue.</h3>

> If you perform an expected action and don't see a response from me, wait a few seconds and refresh the page for your next steps."##
        .to_string()
}

/// Posted when the user assigns themselves, before the Step 2 instructions.
pub fn render_workflow_intro() -> String {
    r##"## Introduction to a typical workflow

Now that you're familiar with issues, let's use this issue to track your path to your first contribution.

People use different workflows to contribute to software projects, but the simplest and most effective way to contribute on GitHub is the GitHub flow.

:tv: [Video: Understanding the GitHub flow](https://www.youtube.com/watch?v=PBI2Rz-ZOxU)

<hr>
<h3 align="center">Read below for next steps</h3>"##
        .to_string()
}

/// Step 2, posted directly after the workflow introduction.
pub fn render_create_branch(owner: &str, repo: &str) -> String {
    format!(
        r##"## Step 2: Create a branch

Let’s complete the first step of the GitHub flow: creating a branch <sup>[:book:](https://help.github.com/articles/github-glossary/#branch)</sup>.

### :keyboard: Activity: Your first branch

1. Navigate to the [Code tab](https://github.factset.com/{owner}/{repo})
2. Click **Branch: master** in the drop-down
3. In the field, enter a name for your branch, like "feat/username-1"
4. Click **Create branch: <name>** or press the “Enter” key to create your branch


<hr>
<h3 align="center">I'll respond when I detect a new branch has been created in this repository.</h3>"##
    )
}

/// Step 3, posted on the training issue when the user creates a branch.
pub fn render_commit_file(branch: &str, login: &str) -> String {
    format!(
        r##"## Step 3: Commit a file

:tada: You created a branch!

Creating a branch allows you to make modifications to your project without changing the deployed "master" branch. Now that you have a branch, it’s time to create a file and make your first commit!

Commits are snapshots of file changes, so let's make our first one.

### :keyboard: Activity: Your first commit

1. Create a new file on this branch named with your username.
			- Return to the "Code" tab
			- In the branch drop-down, select "{branch}"
			- Click **Create new file**
			- In the "file name" field, type "users/{login}.md". Entering the "/" in the filename will automatically place your file in the "users" directory.
1. When you’re done naming the file, add the following content to your file:
      ```yaml
      Hello, world!
      ```
1. After adding the text, you can commit the change by entering a commit message in the text-entry field below the file edit view.
1. When you’ve entered a commit message, click **Commit new file**

<hr>
<h3 align="center">I'll respond when I detect a new commit on this branch.</h3>"##
    )
}

/// Corrective comment posted when a push doesn't add the expected file.
pub fn render_unexpected_file(login: &str, branch: &str) -> String {
    format!(
        r##"## Something's not quite right.

I'm looking for a new file named "users/{login}.md" in your branch {branch}."##
    )
}

/// Step 4, posted on the training issue once the expected file is committed.
pub fn render_open_pull_request(branch: &str, login: &str) -> String {
    format!(
        r##"## Step 4: Open a pull request

Nice work making that commit :sparkles:

In the real world, that commit would contain code working towards some feature or bug fix for one of our products.  Since we're just training here, it can contain anything.

Now that you’ve created a commit, it’s time to share your proposed change through a pull request! Where issues encourage discussion with other contributors and collaborators on a project, pull requests help you share your changes, receive feedback on them, and iterate on them until they’re perfect!

### :keyboard: Activity: Create a pull request

1. Open a pull request:
		- From the "Pull requests" tab, click **New pull request**
		- In the "base:" drop-down menu, make sure the "master" branch is selected
		- In the "compare:" drop-down menu, select "{branch}"
1. When you’ve selected your branch, enter a title for your pull request. For example "Add {login}'s file"
1. The next field helps you provide a description of the changes you made. Feel free to add a description of what you’ve accomplished so far. As a reminder, you have: created a branch, created a file and made a commit, and opened a pull request
1. Click **Create pull request**

<hr>
<h3 align="center">I'll respond in your new pull request.</h3>
		"##
    )
}

/// Step 5, posted on the new pull request.
pub fn render_link_pull_request(issue: IssueNumber) -> String {
    format!(
        r##"## Step 5: Link a Pull Request to an Issue

Awesome work creating that PR.  

Now let's link it to our issue so that when the PR is merged, GitHub will automatically resolve our Issue.

### :keyboard: Activity: Edit a pull request

1. Click on the **...** icon located at the top right corner of the first comment's box, then click on **Edit** to make an edit
1. Add a description of the changes you've made in the comment box. Feel free to add a description of what you’ve accomplished so far. As a reminder, you have: created a branch, created a file and made a commit, and opened a pull request
1. Add the text "Resolves #{issue}" to link this PR with that Issue.
1. Click the green **Update comment** button at the bottom right of the comment box when done

<hr>
<h3 align="center">I'll respond when I detect this pull request's body has been edited.</h3>"##,
        issue = issue.0
    )
}

/// Step 6, the body of the change-request review.
pub fn render_respond_to_review(owner: &str, repo: &str, pr: PrNumber) -> String {
    format!(
        r##"## Step 6: Respond to a review

Your pull request is looking great!

Let’s add some content to your file. Replace the contents of your file with a quotation or meme or witty comment. 

### :keyboard: Activity: Change your file

1. Click the [Files Changed tab](https://github.factset.com/{owner}/{repo}/pull/{pr}/files) in this pull request
1. Click on the pencil icon found on the right side of the screen to edit your newly added file
1. Replace line 1 with something new
1. Scroll to the bottom and click **Commit Changes**

<hr>
<h3 align="center">I'll respond when I detect a commit on this branch.</h3>"##,
        pr = pr.0
    )
}

/// Step 7, the body of the approving review.
pub fn render_merge_pull_request(login: &str) -> String {
    format!(
        r##"## Step 7: Merge your pull request

Nicely done @{login}! :sparkles:

You successfully created a pull request, and it has passed all of the tests.

### :keyboard: Activity: Merge the pull request

1. Click **Merge pull request**
1. Click **Confirm merge**

1. Once your branch has been merged, you don't need it anymore. Click **Delete branch**.

<hr>
<h3 align="center">I'll respond when this pull request is merged.</h3>"##
    )
}

/// Final congratulations, posted on the merged pull request.
pub fn render_course_complete(login: &str) -> String {
    format!(
        r##"## Nice work
		
		Congratulations @{login}, you've completed this course!
		
		## What did you learn?
		
		Here's a recap of all the tasks you've accomplished in your repository:
		
		- You learned about issues, pull requests, and the structure of a GitHub repository
		- You learned about branching
		- You created a commit
		- You viewed and responded to pull request reviews
		- You edited an existing file
		- You made your first contribution! :tada:  
		"##
    )
}
